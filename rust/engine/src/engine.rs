use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cards::{Card, Rank, Suit};
use crate::dealer::Dealer;
use crate::deck::Shoe;
use crate::errors::GameError;
use crate::game::{Command, Phase, SessionStatus};
use crate::player::Player;
use crate::rules::{legal_actions, settle, Action, Settlement};

/// Round state machine for one player against the dealer.
///
/// The engine owns the shoe, the dealer and the player. A front end drives
/// it through the command methods (or [`Engine::apply`]) and reads state back
/// through the query methods; it never touches the hands or the bankroll
/// directly.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::game::Phase;
///
/// let mut engine = Engine::new(Some(7), "Ada", 1000);
/// assert_eq!(engine.phase(), Phase::Betting);
///
/// engine.place_bet(100).expect("valid bet");
/// assert_eq!(engine.player().money(), 900);
///
/// // Stand on whatever was dealt, unless the deal already ended the round
/// if engine.phase() == Phase::PlayerTurn {
///     engine.stand().expect("stand is always legal");
/// }
/// assert!(matches!(engine.phase(), Phase::RoundEnd(_)));
/// assert!(engine.last_settlement().is_some());
/// ```
#[derive(Debug)]
pub struct Engine {
    shoe: Shoe,
    dealer: Dealer,
    player: Player,
    phase: Phase,
    /// Seed behind the shuffle, when the shoe was built from one
    seed: Option<u64>,
    round: u32,
    /// Player decisions taken in the current round, in order
    actions: Vec<Action>,
    last_settlement: Option<Settlement>,
}

impl Engine {
    /// Seats a player with `money` at a freshly shuffled 52-card shoe.
    ///
    /// Without a seed one is drawn at random; [`Engine::seed`] reports it
    /// either way so the session can be replayed.
    pub fn new(seed: Option<u64>, name: impl Into<String>, money: u32) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut shoe = Shoe::new_with_seed(seed);
        shoe.shuffle();
        let mut engine = Self::with_shoe(shoe, Player::new(name, money));
        engine.seed = Some(seed);
        engine
    }

    /// Uses `shoe` as-is for the first round, without shuffling it.
    pub fn with_shoe(shoe: Shoe, player: Player) -> Self {
        Self {
            shoe,
            dealer: Dealer::new(),
            player,
            phase: Phase::Betting,
            seed: None,
            round: 0,
            actions: Vec::new(),
            last_settlement: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Number of rounds started in this session
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }
    /// Settlement of the most recent round, cleared when a new bet is placed.
    pub fn last_settlement(&self) -> Option<&Settlement> {
        self.last_settlement.as_ref()
    }
    pub fn round_actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn is_session_over(&self) -> bool {
        self.phase.is_session_over()
    }

    /// Actions the player may take now. Empty outside the player's turn.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.phase != Phase::PlayerTurn {
            return Vec::new();
        }
        legal_actions(&self.player, &self.dealer)
    }

    /// Routes a command to its handler and reports the resulting phase.
    pub fn apply(&mut self, command: Command) -> Result<Phase, GameError> {
        let outcome = match command {
            Command::PlaceBet(amount) => self.place_bet(amount),
            Command::Insurance(amount) => self.place_insurance(amount),
            Command::Hit => self.hit(),
            Command::Stand => self.stand(),
            Command::DoubleDown => self.double_down(),
            Command::PlayAgain(again) => self.confirm_play_again(again),
        };
        if let Err(e) = &outcome {
            debug!(?command, phase = ?self.phase, error = %e, "command rejected");
        }
        outcome
    }

    /// Reserves the main bet and deals the opening cards.
    pub fn place_bet(&mut self, amount: u32) -> Result<Phase, GameError> {
        self.expect_phase(Phase::Betting)?;
        self.player.place_bet(amount)?;
        self.round += 1;
        self.actions.clear();
        self.last_settlement = None;
        debug!(round = self.round, bet = amount, money = self.player.money(), "bet placed");
        self.transition(Phase::Dealing);
        self.deal()?;
        Ok(self.phase)
    }

    /// Places the insurance side bet; the player's turn continues.
    pub fn place_insurance(&mut self, amount: u32) -> Result<Phase, GameError> {
        self.expect_action(Action::Insurance)?;
        self.player.place_insurance(amount)?;
        self.actions.push(Action::Insurance);
        debug!(round = self.round, insurance = amount, "insurance placed");
        Ok(self.phase)
    }

    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.expect_action(Action::Hit)?;
        let card = self.draw(true)?;
        self.actions.push(Action::Hit);
        self.player.take(card);
        self.check_player_hand();
        Ok(self.phase)
    }

    pub fn stand(&mut self) -> Result<Phase, GameError> {
        self.expect_action(Action::Stand)?;
        self.actions.push(Action::Stand);
        self.player.stand();
        self.play_dealer()?;
        Ok(self.phase)
    }

    /// Doubles the bet, takes exactly one card and ends the player's turn.
    pub fn double_down(&mut self) -> Result<Phase, GameError> {
        self.expect_action(Action::DoubleDown)?;
        self.player.commit_double_down()?;
        self.actions.push(Action::DoubleDown);
        let card = self.draw(true)?;
        self.player.take(card);
        self.player.stand();
        self.check_player_hand();
        if self.phase == Phase::PlayerTurn {
            self.play_dealer()?;
        }
        Ok(self.phase)
    }

    /// Answers the play-again question at the end of a round.
    ///
    /// `true` clears both hands, rebuilds and reshuffles the shoe and returns
    /// to betting. `false` leaves the table and ends the session.
    pub fn confirm_play_again(&mut self, again: bool) -> Result<Phase, GameError> {
        self.expect_phase(Phase::RoundEnd(SessionStatus::AwaitingReplay))?;
        if again {
            self.dealer.reset();
            self.player.reset_cards();
            self.shoe.reset();
            self.shoe.shuffle();
            self.transition(Phase::Betting);
        } else {
            self.player.leave_table();
            info!(
                money = self.player.money(),
                ahead = self.player.finished_ahead(),
                "player left the table"
            );
            self.transition(Phase::RoundEnd(SessionStatus::Left));
        }
        Ok(self.phase)
    }

    /// Starts a new session for the same player with the starting bankroll.
    pub fn restart_session(&mut self) {
        self.player.full_reset();
        self.dealer.reset();
        self.shoe.reset();
        self.shoe.shuffle();
        self.round = 0;
        self.actions.clear();
        self.last_settlement = None;
        self.transition(Phase::Betting);
    }

    /// Read-only view for presentation layers. The hole card stays hidden.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase,
            round: self.round,
            player_name: self.player.name().to_string(),
            money: self.player.money(),
            current_bet: self.player.current_bet(),
            insurance_bet: self.player.insurance_bet(),
            wins: self.player.wins(),
            ties: self.player.ties(),
            losses: self.player.losses(),
            player_cards: self.player.hand().cards().iter().map(CardView::of).collect(),
            player_points: self.player.points(),
            dealer_cards: self.dealer.hand().cards().iter().map(CardView::of).collect(),
            dealer_points: self.dealer.points(),
            legal_actions: self.legal_actions(),
            last_settlement: self.last_settlement,
        }
    }

    // Opening deal: player, dealer (hole card), player, dealer.
    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.draw(true)?;
            self.player.take(card);
            let card = self.draw(self.dealer.next_card_face_up())?;
            self.dealer.take(card);
        }
        self.transition(Phase::PlayerTurn);
        self.check_player_hand();
        Ok(())
    }

    // Settles Aces once the player is over 21; a hand that stays over loses
    // on the spot without the dealer playing.
    fn check_player_hand(&mut self) {
        if self.player.points() <= 21 {
            return;
        }
        if self.player.hand_mut().adjust_aces().is_bust() {
            debug!(points = self.player.points(), "player bust");
            self.finish_round();
        }
    }

    fn play_dealer(&mut self) -> Result<(), GameError> {
        self.transition(Phase::DealerReveal);
        self.dealer.reveal_hole_card();

        self.transition(Phase::DealerDraw);
        while self.dealer.must_draw() {
            let card = self.draw(true)?;
            self.dealer.take(card);
            self.dealer.adjust_aces();
        }

        self.transition(Phase::Resolution);
        self.finish_round();
        Ok(())
    }

    // Every draw inside a round goes through here: a shoe that runs dry ends
    // the round unsettled.
    fn draw(&mut self, face_up: bool) -> Result<Card, GameError> {
        let card = self.shoe.draw(face_up);
        if card.is_err() {
            self.abort_round();
        }
        card
    }

    // Returns both stakes and waits for the play-again answer. No settlement
    // is recorded and the win/tie/loss counters are untouched.
    fn abort_round(&mut self) {
        let refund = self
            .player
            .current_bet()
            .saturating_add(self.player.insurance_bet());
        self.player.credit(refund);
        self.player.reset_bets();
        self.last_settlement = None;
        warn!(round = self.round, refund, "shoe ran out, round aborted");
        self.transition(Phase::RoundEnd(SessionStatus::AwaitingReplay));
    }

    fn finish_round(&mut self) {
        let settlement = settle(
            self.player.hand(),
            self.dealer.hand(),
            self.player.current_bet(),
            self.player.insurance_bet(),
        );
        self.player.credit(settlement.credit);
        self.player.record(settlement.result());
        self.player.reset_bets();
        self.last_settlement = Some(settlement);
        info!(
            round = self.round,
            resolution = ?settlement.resolution,
            credit = settlement.credit,
            net = settlement.net(),
            money = self.player.money(),
            "round settled"
        );

        let status = if self.player.money() == 0 {
            info!(round = self.round, "player is bankrupt");
            SessionStatus::Bankrupt
        } else {
            SessionStatus::AwaitingReplay
        };
        self.transition(Phase::RoundEnd(status));
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase.is_session_over() {
            return Err(GameError::SessionOver);
        }
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn expect_action(&self, action: Action) -> Result<(), GameError> {
        if self.phase.is_session_over() {
            return Err(GameError::SessionOver);
        }
        if !self.legal_actions().contains(&action) {
            return Err(GameError::IllegalAction {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }
}

/// A card as a player at the table would see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub suit: Option<Suit>,
    pub rank: Option<Rank>,
    pub face_up: bool,
    pub value: u8,
}

impl CardView {
    pub fn of(card: &Card) -> Self {
        if card.is_face_up() {
            Self {
                suit: Some(card.suit),
                rank: Some(card.rank),
                face_up: true,
                value: card.value(),
            }
        } else {
            Self {
                suit: None,
                rank: None,
                face_up: false,
                value: 0,
            }
        }
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub player_name: String,
    pub money: u32,
    pub current_bet: u32,
    pub insurance_bet: u32,
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub player_cards: Vec<CardView>,
    pub player_points: u32,
    pub dealer_cards: Vec<CardView>,
    pub dealer_points: u32,
    pub legal_actions: Vec<Action>,
    pub last_settlement: Option<Settlement>,
}
