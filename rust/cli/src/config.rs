use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u64,
    pub min_bet: u64,
    pub deck_count: u8,
    pub window: usize,
    pub ai_edge: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub min_bet: ValueSource,
    pub deck_count: ValueSource,
    pub window: ValueSource,
    pub ai_edge: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            min_bet: ValueSource::Default,
            deck_count: ValueSource::Default,
            window: ValueSource::Default,
            ai_edge: ValueSource::Default,
            seed: ValueSource::Default,
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
            starting_balance: 1_000,
            min_bet: 10,
            deck_count: 6,
            window: 5,
            ai_edge: 0.7,
            seed: None,
        }
    }
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve the configuration: built-in defaults, then the TOML file named
/// by `PARLOR_CONFIG` (when set), then `PARLOR_*` environment overrides.
/// Each value remembers where it came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PARLOR_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.deck_count {
            cfg.deck_count = v;
            sources.deck_count = ValueSource::File;
        }
        if let Some(v) = f.window {
            cfg.window = v;
            sources.window = ValueSource::File;
        }
        if let Some(v) = f.ai_edge {
            cfg.ai_edge = v;
            sources.ai_edge = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(balance) = std::env::var("PARLOR_STARTING_BALANCE")
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(min_bet) = std::env::var("PARLOR_MIN_BET")
        && !min_bet.is_empty()
    {
        cfg.min_bet = min_bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid min_bet".into()))?;
        sources.min_bet = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("PARLOR_DECK_COUNT")
        && !decks.is_empty()
    {
        cfg.deck_count = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid deck_count".into()))?;
        sources.deck_count = ValueSource::Env;
    }
    if let Ok(window) = std::env::var("PARLOR_WINDOW")
        && !window.is_empty()
    {
        cfg.window = window
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid window".into()))?;
        sources.window = ValueSource::Env;
    }
    if let Ok(edge) = std::env::var("PARLOR_AI_EDGE")
        && !edge.is_empty()
    {
        cfg.ai_edge = edge
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid ai_edge".into()))?;
        sources.ai_edge = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("PARLOR_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
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
    starting_balance: Option<u64>,
    #[serde(default)]
    min_bet: Option<u64>,
    #[serde(default)]
    deck_count: Option<u8>,
    #[serde(default)]
    window: Option<usize>,
    #[serde(default)]
    ai_edge: Option<f64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.min_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must be >=1".into(),
        ));
    }
    if cfg.deck_count == 0 || cfg.deck_count > 8 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: deck_count must be 1..=8".into(),
        ));
    }
    if cfg.window == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: window must be >=1".into(),
        ));
    }
    if !cfg.ai_edge.is_finite() || !(0.0..=1.0).contains(&cfg.ai_edge) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: ai_edge must be within 0.0..=1.0".into(),
        ));
    }
    Ok(())
}
