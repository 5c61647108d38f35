//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Filter directive (e.g. "info", "trivia_application=debug").
    /// Overridden by `RUST_LOG` and by `-v` flags.
    pub filter: Option<String>,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
}
