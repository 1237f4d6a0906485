//! Harness configuration file

use giniround_core::RounderKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::harness::{Harness, DEFAULT_INPUTS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub rounder: RounderKind,
    pub cases: Vec<f32>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rounder: RounderKind::default(),
            cases: DEFAULT_INPUTS.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn harness(&self) -> Harness {
        Harness::with_inputs(self.cases.iter().copied())
    }
}
