use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: Vec<String>,
    pub total_cards: usize,
    pub max_card_value: u32,
    pub seed: Option<u64>,
    pub max_rounds: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub total_cards: ValueSource,
    pub max_card_value: ValueSource,
    pub seed: ValueSource,
    pub max_rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            total_cards: ValueSource::Default,
            max_card_value: ValueSource::Default,
            seed: ValueSource::Default,
            max_rounds: ValueSource::Default,
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
            players: vec!["1".into(), "2".into()],
            total_cards: 40,
            max_card_value: 10,
            seed: None,
            max_rounds: None,
        }
    }
}

/// Values given on the command line; they win over file and env.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub players: Option<Vec<String>>,
    pub total_cards: Option<usize>,
    pub max_card_value: Option<u32>,
    pub seed: Option<u64>,
    pub max_rounds: Option<u64>,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&Overrides::default())
}

/// Resolves defaults, then the TOML file named by `CARDWAR_CONFIG`, then
/// `CARDWAR_*` env vars, then command-line overrides.
pub fn load_with_overrides(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CARDWAR_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.total_cards {
            cfg.total_cards = v;
            sources.total_cards = ValueSource::File;
        }
        if let Some(v) = f.max_card_value {
            cfg.max_card_value = v;
            sources.max_card_value = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_rounds {
            cfg.max_rounds = Some(v);
            sources.max_rounds = ValueSource::File;
        }
    }

    if let Ok(players) = std::env::var("CARDWAR_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = split_names(&players);
        sources.players = ValueSource::Env;
    }
    if let Ok(total) = std::env::var("CARDWAR_TOTAL_CARDS")
        && !total.is_empty()
    {
        cfg.total_cards = total
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid total cards".into()))?;
        sources.total_cards = ValueSource::Env;
    }
    if let Ok(max) = std::env::var("CARDWAR_MAX_CARD_VALUE")
        && !max.is_empty()
    {
        cfg.max_card_value = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max card value".into()))?;
        sources.max_card_value = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("CARDWAR_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var("CARDWAR_MAX_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.max_rounds = Some(
            rounds
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid max rounds".into()))?,
        );
        sources.max_rounds = ValueSource::Env;
    }

    if let Some(v) = &overrides.players {
        cfg.players = v.clone();
        sources.players = ValueSource::Cli;
    }
    if let Some(v) = overrides.total_cards {
        cfg.total_cards = v;
        sources.total_cards = ValueSource::Cli;
    }
    if let Some(v) = overrides.max_card_value {
        cfg.max_card_value = v;
        sources.max_card_value = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.max_rounds {
        cfg.max_rounds = Some(v);
        sources.max_rounds = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    total_cards: Option<usize>,
    #[serde(default)]
    max_card_value: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_rounds: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players.len() < 2 {
        return Err(ConfigError::Invalid(
            "at least 2 players are required".into(),
        ));
    }
    if cfg.players.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Invalid(
            "player names must not be empty".into(),
        ));
    }
    if cfg.total_cards < 2 {
        return Err(ConfigError::Invalid(
            "total_cards must be >=2".into(),
        ));
    }
    if cfg.max_card_value < 2 {
        return Err(ConfigError::Invalid(
            "max_card_value must be >=2".into(),
        ));
    }
    Ok(())
}

fn split_names(s: &str) -> Vec<String> {
    s.split(',').map(|p| p.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_two_player_game() {
        let cfg = Config::default();
        assert_eq!(cfg.players, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(cfg.total_cards, 40);
        assert_eq!(cfg.max_card_value, 10);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_small_games() {
        let mut cfg = Config::default();
        cfg.players = vec!["solo".into()];
        assert!(validate(&cfg).is_err());

        let mut cfg = Config::default();
        cfg.total_cards = 1;
        assert!(validate(&cfg).is_err());

        let mut cfg = Config::default();
        cfg.max_card_value = 1;
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn split_names_trims_whitespace() {
        assert_eq!(split_names("ann, bob ,cy"), vec!["ann", "bob", "cy"]);
    }
}
