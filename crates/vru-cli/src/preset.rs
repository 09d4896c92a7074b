//! TOML presets describing a starting filter state.
//!
//! ```toml
//! [filters]
//! environment = "Naturalistic"
//! numVRUs = 2
//!
//! [filters.ranges.azimuth]
//! min = -10
//! max = 10
//!
//! [preferences]
//! ped_arm = "must"
//! wheelchair = "mustNot"
//! ```
//!
//! Every key is optional; missing keys keep their baseline value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use vru_filter::FilterStore;
use vru_model::{FilterConfiguration, VruPreferenceSet};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid preset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Starting configuration and VRU preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub filters: FilterConfiguration,
    pub preferences: VruPreferenceSet,
}

impl Preset {
    /// Parse preset text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a preset file.
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let text = fs::read_to_string(path).map_err(|source| PresetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let preset = Self::parse(&text).map_err(|source| PresetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Load from `path`, or start from the baseline when no path is given.
    pub fn load_or_baseline(path: Option<&Path>) -> Result<Self, PresetError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn into_store(self) -> FilterStore {
        FilterStore::from_parts(self.filters, self.preferences)
    }
}
