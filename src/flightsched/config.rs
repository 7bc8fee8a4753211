use crate::error::{FlightError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "flightsched.json";
const DEFAULT_DB_FILE: &str = "db.json";
const DEFAULT_ERROR_LOG: &str = "errors.txt";
const DEFAULT_RESPONSE_PREFIX: &str = "response";
const DEFAULT_SOURCE_EXT: &str = ".csv";

/// Configuration for flightsched, read from `flightsched.json` in the working
/// directory when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightConfig {
    /// Where the database is written after parsing
    #[serde(default = "default_db_file")]
    pub db_file: PathBuf,

    /// Where rejected and commented lines are logged
    #[serde(default = "default_error_log")]
    pub error_log: PathBuf,

    /// Leading part of response file names
    #[serde(default = "default_response_prefix")]
    pub response_prefix: String,

    /// Extension of source files picked up from a directory (e.g. ".csv")
    #[serde(default = "default_source_ext")]
    pub source_ext: String,
}

fn default_db_file() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

fn default_error_log() -> PathBuf {
    PathBuf::from(DEFAULT_ERROR_LOG)
}

fn default_response_prefix() -> String {
    DEFAULT_RESPONSE_PREFIX.to_string()
}

fn default_source_ext() -> String {
    DEFAULT_SOURCE_EXT.to_string()
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            error_log: default_error_log(),
            response_prefix: default_response_prefix(),
            source_ext: default_source_ext(),
        }
    }
}

impl FlightConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| FlightError::Read {
            path: config_path.clone(),
            source,
        })?;
        let mut config: FlightConfig =
            serde_json::from_str(&content).map_err(|source| FlightError::MalformedJson {
                path: config_path,
                source,
            })?;
        let ext = config.source_ext.clone();
        config.set_source_ext(&ext);
        Ok(config)
    }

    /// Set the source extension (normalizes to start with a dot)
    pub fn set_source_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.source_ext = ext.to_string();
        } else {
            self.source_ext = format!(".{}", ext);
        }
    }

    pub fn with_db_file(mut self, db_file: Option<PathBuf>) -> Self {
        if let Some(path) = db_file {
            self.db_file = path;
        }
        self
    }
}
