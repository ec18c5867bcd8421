//! Input parsing and validation for the interactive table.
//!
//! This module turns the lines a player types into engine [`Command`]s. It
//! handles:
//! - Bet amounts in the betting phase
//! - Turn actions (hit, stand, double down, insurance)
//! - The play-again question
//!
//! Parsing only checks the shape of the input. Whether a bet fits the
//! bankroll or an action is currently legal is decided by the engine.

use blackjack_engine::game::Command;

/// Result type for parsing user input into engine commands.
///
/// This enum represents the three possible outcomes when parsing user input
/// at the table:
/// - Valid command
/// - Quit command (user wants to leave)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Command parsed from input
    Action(Command),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(word: &str) -> bool {
    word == "q" || word == "quit"
}

fn parse_amount(word: &str, what: &str) -> Result<u32, String> {
    match word.parse::<u32>() {
        Ok(0) => Err(format!("{} must be positive", what)),
        Ok(amount) => Ok(amount),
        Err(_) => Err(format!("Invalid {} '{}'", what.to_lowercase(), word)),
    }
}

/// Parse the answer to "how much would you like to bet?".
///
/// Accepts a bare amount (`100`) or `bet 100`, plus `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_bet, ParseResult};
/// use blackjack_engine::game::Command;
///
/// assert_eq!(parse_bet("250"), ParseResult::Action(Command::PlaceBet(250)));
/// assert_eq!(parse_bet("bet 5"), ParseResult::Action(Command::PlaceBet(5)));
/// assert_eq!(parse_bet("quit"), ParseResult::Quit);
/// assert!(matches!(parse_bet("lots"), ParseResult::Invalid(_)));
/// ```
pub fn parse_bet(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let amount = match parts.as_slice() {
        [] => return ParseResult::Invalid("Empty input".to_string()),
        [word] if is_quit(word) => return ParseResult::Quit,
        ["bet"] => {
            return ParseResult::Invalid("Bet requires an amount (e.g., 'bet 100')".to_string());
        }
        [amount] | ["bet", amount] => amount,
        _ => {
            return ParseResult::Invalid(format!(
                "Unrecognized bet '{}'. Enter an amount or q",
                input
            ));
        }
    };
    match parse_amount(amount, "Bet") {
        Ok(amount) => ParseResult::Action(Command::PlaceBet(amount)),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// Parse a turn action.
///
/// Accepts the following input formats (case-insensitive):
/// - "hit", "h", "y" or "1" → Hit
/// - "stand", "s", "n" or "2" → Stand
/// - "double" or "d" → Double down
/// - "insurance X" or "i X" → Insurance with amount X
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_player_action, ParseResult};
/// use blackjack_engine::game::Command;
///
/// assert_eq!(parse_player_action("h"), ParseResult::Action(Command::Hit));
/// assert_eq!(parse_player_action("2"), ParseResult::Action(Command::Stand));
/// assert_eq!(
///     parse_player_action("insurance 50"),
///     ParseResult::Action(Command::Insurance(50))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("split") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if is_quit(parts[0]) {
        return ParseResult::Quit;
    }

    match parts[0] {
        "hit" | "h" | "y" | "1" => ParseResult::Action(Command::Hit),
        "stand" | "s" | "n" | "2" => ParseResult::Action(Command::Stand),
        "double" | "d" => ParseResult::Action(Command::DoubleDown),
        "insurance" | "i" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Insurance requires an amount (e.g., 'insurance 50')".to_string(),
                );
            }
            match parse_amount(parts[1], "Insurance") {
                Ok(amount) => ParseResult::Action(Command::Insurance(amount)),
                Err(msg) => ParseResult::Invalid(msg),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, double, insurance <amount>, q",
            parts[0]
        )),
    }
}

/// Parse the answer to "play another round?".
///
/// `yes`/`y` plays on, `no`/`n` leaves the table; `q` is treated as a quit.
pub fn parse_play_again(input: &str) -> ParseResult {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => ParseResult::Action(Command::PlayAgain(true)),
        "no" | "n" => ParseResult::Action(Command::PlayAgain(false)),
        word if is_quit(word) => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input".to_string()),
        other => ParseResult::Invalid(format!("Please answer yes or no, not '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bet_amounts() {
        assert_eq!(parse_bet("1"), ParseResult::Action(Command::PlaceBet(1)));
        assert_eq!(parse_bet("  BET 40 "), ParseResult::Action(Command::PlaceBet(40)));
    }

    #[test]
    fn test_parse_bet_rejects_zero_and_garbage() {
        assert_eq!(
            parse_bet("0"),
            ParseResult::Invalid("Bet must be positive".to_string())
        );
        assert!(matches!(parse_bet("-5"), ParseResult::Invalid(_)));
        assert!(matches!(parse_bet("bet"), ParseResult::Invalid(_)));
        assert!(matches!(parse_bet("bet 5 now"), ParseResult::Invalid(_)));
        assert!(matches!(parse_bet(""), ParseResult::Invalid(_)));
    }

    #[test]
    fn test_parse_action_aliases() {
        for hit in ["hit", "H", "y", "1"] {
            assert_eq!(parse_player_action(hit), ParseResult::Action(Command::Hit));
        }
        for stand in ["stand", "s", "N", "2"] {
            assert_eq!(parse_player_action(stand), ParseResult::Action(Command::Stand));
        }
        assert_eq!(
            parse_player_action("Double"),
            ParseResult::Action(Command::DoubleDown)
        );
        assert_eq!(
            parse_player_action("i 10"),
            ParseResult::Action(Command::Insurance(10))
        );
    }

    #[test]
    fn test_parse_action_insurance_needs_amount() {
        assert!(matches!(parse_player_action("insurance"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("i x"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("i 0"), ParseResult::Invalid(_)));
    }

    #[test]
    fn test_parse_quit_everywhere() {
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
        assert_eq!(parse_bet("Q"), ParseResult::Quit);
        assert_eq!(parse_play_again("q"), ParseResult::Quit);
    }

    #[test]
    fn test_parse_play_again() {
        assert_eq!(
            parse_play_again("Yes"),
            ParseResult::Action(Command::PlayAgain(true))
        );
        assert_eq!(
            parse_play_again("n"),
            ParseResult::Action(Command::PlayAgain(false))
        );
        assert!(matches!(parse_play_again("maybe"), ParseResult::Invalid(_)));
    }
}
