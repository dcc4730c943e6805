use std::fs;

use blackjack_engine::rules::{DealerPolicy, TableRules};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dealer rule as written in config files, env vars and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DealerRule {
    /// Dealer hits soft 17
    H17,
    /// Dealer stands on all 17s
    S17,
}

impl DealerRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealerRule::H17 => "h17",
            DealerRule::S17 => "s17",
        }
    }
}

impl From<DealerRule> for DealerPolicy {
    fn from(rule: DealerRule) -> Self {
        match rule {
            DealerRule::H17 => DealerPolicy::HitSoft17,
            DealerRule::S17 => DealerPolicy::StandAll17,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub num_decks: u8,
    pub dealer: DealerRule,
    pub wager: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            num_decks: 1,
            dealer: DealerRule::H17,
            wager: 1.0,
        }
    }
}

impl Config {
    pub fn table_rules(&self) -> TableRules {
        TableRules {
            num_decks: self.num_decks,
            dealer_policy: self.dealer.into(),
            wager: self.wager,
            ..TableRules::default()
        }
    }
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
    pub seed: ValueSource,
    pub num_decks: ValueSource,
    pub dealer: ValueSource,
    pub wager: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            num_decks: ValueSource::Default,
            dealer: ValueSource::Default,
            wager: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of the file and env layers.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        decks: Option<u8>,
        dealer: Option<DealerRule>,
        wager: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = decks {
            self.config.num_decks = v;
            self.sources.num_decks = ValueSource::Cli;
        }
        if let Some(v) = dealer {
            self.config.dealer = v;
            self.sources.dealer = ValueSource::Cli;
        }
        if let Some(v) = wager {
            self.config.wager = v;
            self.sources.wager = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const SEED_ENV: &str = "BLACKJACK_SEED";
pub const DECKS_ENV: &str = "BLACKJACK_DECKS";
pub const DEALER_ENV: &str = "BLACKJACK_DEALER";
pub const WAGER_ENV: &str = "BLACKJACK_WAGER";

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Layers defaults, the TOML file named by `BLACKJACK_CONFIG` and the
/// `BLACKJACK_*` overrides, reading variables through `env`.
pub fn resolve<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.num_decks {
            cfg.num_decks = v;
            sources.num_decks = ValueSource::File;
        }
        if let Some(v) = f.dealer {
            cfg.dealer = v;
            sources.dealer = ValueSource::File;
        }
        if let Some(v) = f.wager {
            cfg.wager = v;
            sources.wager = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(decks) = var(DECKS_ENV) {
        cfg.num_decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid decks: {decks}")))?;
        sources.num_decks = ValueSource::Env;
    }
    if let Some(dealer) = var(DEALER_ENV) {
        cfg.dealer = DealerRule::from_str(&dealer, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid dealer rule: {dealer}")))?;
        sources.dealer = ValueSource::Env;
    }
    if let Some(wager) = var(WAGER_ENV) {
        cfg.wager = wager
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid wager: {wager}")))?;
        sources.wager = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default, alias = "decks")]
    num_decks: Option<u8>,
    #[serde(default)]
    dealer: Option<DealerRule>,
    #[serde(default)]
    wager: Option<f64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table_rules()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
