//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; unknown keys are ignored.

mod logging;
mod quiz;
mod server;
mod store;

pub use logging::FileLoggingConfig;
pub use quiz::FileQuizConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use store::FileStoreConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems detected in an otherwise well-formed configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.bind: '{0}' is not a valid socket address")]
    InvalidBind(String),

    #[error("store.seed: file '{0}' does not exist")]
    MissingSeedFile(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Question store settings
    pub store: FileStoreConfig,
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.bind_addr().is_none() {
            issues.push(ConfigValidationError::InvalidBind(self.server.bind.clone()));
        }

        if let Some(seed) = &self.store.seed
            && !seed.exists()
        {
            issues.push(ConfigValidationError::MissingSeedFile(
                seed.display().to_string(),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:8080"

[store]
seed = "data/questions.json"

[quiz]
seed = 42

[logging]
filter = "debug"
file = "logs/trivia.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.store.seed, Some(PathBuf::from("data/questions.json")));
        assert_eq!(config.quiz.seed, Some(42));
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("logs/trivia.log")));
    }

    #[test]
    fn test_deserialize_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[quiz]\nseed = 7\n").unwrap();
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert_eq!(config.store.seed, None);
        assert_eq!(config.quiz.seed, Some(7));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.server.bind = "not an address".to_string();
        config.store.seed = Some(PathBuf::from("/definitely/not/here.json"));

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], ConfigValidationError::InvalidBind(_)));
        assert!(matches!(issues[1], ConfigValidationError::MissingSeedFile(_)));
    }
}
