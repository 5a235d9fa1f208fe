use handreader_engine::errors::EvalError;
use handreader_engine::game::Game;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::formatters::SuitStyle;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Game used by `drill` and `bench` when `--game` is absent.
    pub game: Game,
    pub seats: usize,
    pub seed: Option<u64>,
    pub suits: SuitStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub game: ValueSource,
    pub seats: ValueSource,
    pub seed: ValueSource,
    pub suits: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            game: ValueSource::Default,
            seats: ValueSource::Default,
            seed: ValueSource::Default,
            suits: ValueSource::Default,
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
            game: Game::Holdem,
            seats: 2,
            seed: None,
            suits: SuitStyle::Letters,
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANDREADER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.game {
            cfg.game = parse_game(&v)?;
            sources.game = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.suits {
            cfg.suits = v.parse().map_err(ConfigError::Invalid)?;
            sources.suits = ValueSource::File;
        }
    }

    if let Ok(game) = std::env::var("HANDREADER_GAME")
        && !game.is_empty()
    {
        cfg.game = parse_game(&game)?;
        sources.game = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var("HANDREADER_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid seats".into()))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HANDREADER_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(suits) = std::env::var("HANDREADER_SUITS")
        && !suits.is_empty()
    {
        cfg.suits = suits.parse().map_err(ConfigError::Invalid)?;
        sources.suits = ValueSource::Env;
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
    game: Option<String>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    suits: Option<String>,
}

fn parse_game(id: &str) -> Result<Game, ConfigError> {
    id.parse()
        .map_err(|e: EvalError| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_seats(cfg.seats)
        .map_err(|msg| ConfigError::Invalid(format!("Invalid configuration: {}", msg)))
}

/// Seat counts accepted by `drill` and `bench`.
pub fn validate_seats(seats: usize) -> Result<(), String> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        return Err(format!(
            "seats must be between {} and {}, got {}",
            MIN_SEATS, MAX_SEATS, seats
        ));
    }
    Ok(())
}
