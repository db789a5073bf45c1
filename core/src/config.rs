//! Desk configuration, loadable from a JSON file by the runner.

use crate::error::DeskResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// SQLite database path. ":memory:" keeps everything in RAM.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Upper bound on the in-memory activity feed. Zero means unbounded.
    #[serde(default = "default_activity_capacity")]
    pub activity_capacity: usize,
}

fn default_database_path() -> String {
    "isp_database.db".to_string()
}

fn default_activity_capacity() -> usize {
    64
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            activity_capacity: default_activity_capacity(),
        }
    }
}

impl DeskConfig {
    pub fn load(path: &Path) -> DeskResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(anyhow::Error::from)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
