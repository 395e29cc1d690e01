//! Runtime configuration from environment variables.
//!
//! | Variable             | Default   | Meaning                                     |
//! |----------------------|-----------|---------------------------------------------|
//! | `HOST`               | `0.0.0.0` | Address the web server binds to             |
//! | `PORT`               | `8080`    | Port the web server binds to                |
//! | `DATA_FILE`          | `data.csv`| Where the statistics table is stored        |
//! | `EQUAL_SCORE_POLICY` | `reject`  | `reject` or `second-team-wins`              |
//! | `ROSTER_POLICY`      | `strict`  | `strict` or `auto-register`                 |
//! | `MAX_SCORE`          | `10`      | Highest accepted team score, or `none`      |

use crate::logic::{ScoringRules, UnknownPolicy};
use std::path::PathBuf;

/// A variable is set but its value doesn't parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid value for {}: {:?}", self.variable, self.value)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub rules: ScoringRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_file: PathBuf::from("data.csv"),
            rules: ScoringRules::default(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let invalid = |variable: &'static str, value: &str| ConfigError {
            variable,
            value: value.to_string(),
        };

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| invalid("PORT", &port))?;
        }
        if let Some(path) = lookup("DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(policy) = lookup("EQUAL_SCORE_POLICY") {
            config.rules.equal_scores = policy
                .parse()
                .map_err(|_: UnknownPolicy| invalid("EQUAL_SCORE_POLICY", &policy))?;
        }
        if let Some(policy) = lookup("ROSTER_POLICY") {
            config.rules.roster = policy
                .parse()
                .map_err(|_: UnknownPolicy| invalid("ROSTER_POLICY", &policy))?;
        }
        if let Some(max) = lookup("MAX_SCORE") {
            config.rules.max_score = if max.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(max.trim().parse().map_err(|_| invalid("MAX_SCORE", &max))?)
            };
        }
        Ok(config)
    }
}
