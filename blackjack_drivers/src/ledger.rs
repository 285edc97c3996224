//! Chip balances kept between sessions in a small YAML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipLedger {
    pub player_chips: i64,
    pub dealer_chips: i64,
}

impl ChipLedger {
    /// Loads the ledger, or returns `None` when the file does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<ChipLedger>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let ledger = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: display,
            source,
        })?;
        Ok(Some(ledger))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let display = path.as_ref().display().to_string();
        let content = serde_yaml::to_string(self).map_err(|source| ConfigError::Yaml {
            path: display.clone(),
            source,
        })?;
        fs::write(path.as_ref(), content).map_err(|source| ConfigError::Io {
            path: display,
            source,
        })?;
        log::debug!("Saved {:?} to {}", self, path.as_ref().display());
        Ok(())
    }
}
