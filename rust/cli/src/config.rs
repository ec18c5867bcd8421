use blackjack_engine::player::STARTING_MONEY;
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "BLACKJACK_CONFIG";
pub const ENV_SEED: &str = "BLACKJACK_SEED";
pub const ENV_STARTING_MONEY: &str = "BLACKJACK_STARTING_MONEY";
pub const ENV_NAME: &str = "BLACKJACK_NAME";
pub const ENV_AI: &str = "BLACKJACK_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_money: u32,
    pub seed: Option<u64>,
    pub player_name: String,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_money: ValueSource,
    pub seed: ValueSource,
    pub player_name: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_money: ValueSource::Default,
            seed: ValueSource::Default,
            player_name: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            seed: None,
            player_name: "You".into(),
            ai: "baseline".into(),
        }
    }
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub starting_money: Option<u32>,
    pub seed: Option<u64>,
    pub player_name: Option<String>,
    pub ai: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Defaults, then the file named by `BLACKJACK_CONFIG`, then `BLACKJACK_*`
/// environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(money) = std::env::var(ENV_STARTING_MONEY)
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting money '{}'", money)))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(ENV_NAME)
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(ENV_AI)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Loads the layered configuration and applies command-line overrides last.
pub fn load_with_overrides(overrides: Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_with_sources()?;
    let ConfigResolved { config, sources } = &mut resolved;
    if let Some(v) = overrides.starting_money {
        config.starting_money = v;
        sources.starting_money = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        config.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.player_name {
        config.player_name = v;
        sources.player_name = ValueSource::Cli;
    }
    if let Some(v) = overrides.ai {
        config.ai = v;
        sources.ai = ValueSource::Cli;
    }
    validate(config)?;
    Ok(resolved)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_money == 0 {
        return Err(ConfigError::Invalid(
            "starting_money must be >0".into(),
        ));
    }
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "player_name must not be empty".into(),
        ));
    }
    if cfg.ai.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "ai must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_money, 1_000);
        assert_eq!(cfg.player_name, "You");
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn rejects_zero_money_and_blank_name() {
        let broke = Config {
            starting_money: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&broke), Err(ConfigError::Invalid(_))));

        let nameless = Config {
            player_name: "  ".into(),
            ..Config::default()
        };
        assert!(matches!(validate(&nameless), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn file_config_accepts_partial_tables() {
        let f: FileConfig = toml::from_str("seed = 7\nplayer_name = \"Ada\"\n").unwrap();
        assert_eq!(f.seed, Some(7));
        assert_eq!(f.player_name.as_deref(), Some("Ada"));
        assert!(f.starting_money.is_none());
    }
}
