use crate::error::{Result, TuduError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Which persistence backend a store invocation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Json,
    Sqlite,
}

impl Default for BackendKind {
    fn default() -> Self {
        Self::Json
    }
}

/// Configuration for tudu, stored in `config.json` in the data directory.
///
/// The `--backend` flag overrides the configured value for one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuduConfig {
    /// Default storage backend ("json" or "sqlite")
    #[serde(default)]
    pub backend: BackendKind,
}

impl TuduConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TuduError::Io)?;
        let config: TuduConfig =
            serde_json::from_str(&content).map_err(TuduError::Serialization)?;
        Ok(config)
    }
}
