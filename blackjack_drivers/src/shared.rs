pub mod console;
pub mod ledger;

use blackjack;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use console::Console;
pub use ledger::ChipLedger;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("invalid rule: {0}")]
    Rule(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rule: ConfigRule,
    #[serde(default)]
    pub table: ConfigTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRule {
    pub dealer_policy: String,
    pub allow_double: bool,
    pub allow_surrender: bool,

    pub payout_blackjack: f64,
}

impl Default for ConfigRule {
    fn default() -> Self {
        let rule = blackjack::Rule::default();
        ConfigRule {
            dealer_policy: rule.dealer_policy.to_string(),
            allow_double: rule.allow_double,
            allow_surrender: rule.allow_surrender,
            payout_blackjack: rule.payout_blackjack,
        }
    }
}

impl TryInto<blackjack::Rule> for ConfigRule {
    type Error = ConfigError;

    fn try_into(self) -> Result<blackjack::Rule, Self::Error> {
        let dealer_policy = self.dealer_policy.parse().map_err(|_| {
            ConfigError::Rule(format!("unknown dealer policy '{}'", self.dealer_policy))
        })?;
        if !self.payout_blackjack.is_finite() || self.payout_blackjack < 0.0 {
            return Err(ConfigError::Rule(format!(
                "payout_blackjack must be a non-negative number, got {}",
                self.payout_blackjack
            )));
        }

        let blackjack_rule = blackjack::Rule {
            dealer_policy,
            allow_double: self.allow_double,
            allow_surrender: self.allow_surrender,
            payout_blackjack: self.payout_blackjack,
        };

        Ok(blackjack_rule)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigTable {
    pub player_name: String,
    pub dealer_name: String,
    pub player_chips: i64,
    pub dealer_chips: i64,
    pub default_bet: u32,
}

impl Default for ConfigTable {
    fn default() -> Self {
        ConfigTable {
            player_name: String::from("John Doe"),
            dealer_name: String::from("Anonymous Dealer"),
            player_chips: 1000,
            dealer_chips: 1000,
            default_bet: 100,
        }
    }
}

/// Reads the content of a given config file and parses it to a Config.
/// Sections or keys left out of the file take their default values.
pub fn parse_config_from_file(filename: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = filename.as_ref().display().to_string();
    let file_content = fs::read_to_string(filename.as_ref()).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    serde_yaml::from_str(&file_content).map_err(|source| ConfigError::Yaml { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_typical_config_rule() -> ConfigRule {
        ConfigRule {
            dealer_policy: String::from("HitOnSoft17"),
            allow_double: true,
            allow_surrender: false,
            payout_blackjack: 1.2,
        }
    }

    #[test]
    fn can_convert_rule() {
        let config_rule = get_typical_config_rule();
        let converted_rule: blackjack::Rule = config_rule.try_into().unwrap();
        assert_eq!(
            converted_rule.dealer_policy,
            blackjack::DealerPolicy::HitOnSoft17
        );
        assert!(converted_rule.allow_double);
        assert!(!converted_rule.allow_surrender);
        assert_eq!(converted_rule.payout_blackjack, 1.2);
    }

    #[test]
    fn should_return_error_when_converting_rule() {
        let mut config_rule = get_typical_config_rule();
        config_rule.dealer_policy = String::from("Not a policy");
        let convert_result: Result<blackjack::Rule, ConfigError> = config_rule.try_into();
        assert!(convert_result.is_err());

        let mut config_rule = get_typical_config_rule();
        config_rule.payout_blackjack = -1.0;
        let convert_result: Result<blackjack::Rule, ConfigError> = config_rule.try_into();
        assert!(convert_result.is_err());
    }

    #[test]
    fn default_config_converts_to_default_rule() {
        let converted_rule: blackjack::Rule = Config::default().rule.try_into().unwrap();
        assert_eq!(converted_rule, blackjack::Rule::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "rule:\n  dealer_policy: HitOnSoft17\ntable:\n  player_chips: 250\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.rule.dealer_policy, "HitOnSoft17");
        assert!(config.rule.allow_surrender);
        assert_eq!(config.table.player_chips, 250);
        assert_eq!(config.table.dealer_chips, 1000);
        assert_eq!(config.table.player_name, "John Doe");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = parse_config_from_file("/nonexistent/blackjack.yml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
