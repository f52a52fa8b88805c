mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::parser::Field;
use std::path::Path;

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Every label key must name one of the seven canonical fields
        for pack in &self.languages {
            for key in pack.labels.keys() {
                if Field::parse_key(key).is_none() {
                    return Err(ConfigError::UnknownField {
                        pack: pack.name.clone(),
                        field: key.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
