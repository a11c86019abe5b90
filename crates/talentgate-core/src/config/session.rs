//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the client keeps its session between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Persistence backend.
    #[serde(default)]
    pub backend: SessionBackend,
    /// JSON file used by the `file` backend.
    #[serde(default = "default_file_path")]
    pub file_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            file_path: default_file_path(),
        }
    }
}

/// Session persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackend {
    /// Persist to a JSON file.
    #[default]
    File,
    /// Keep the session in memory only.
    Memory,
}

impl std::fmt::Display for SessionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionBackend::File => write!(f, "file"),
            SessionBackend::Memory => write!(f, "memory"),
        }
    }
}

fn default_file_path() -> String {
    "data/session.json".to_string()
}
