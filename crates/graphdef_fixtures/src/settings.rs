// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixture generator settings.
//!
//! Settings are stored as RON next to the generator. When no settings file
//! exists the built-in fixtures are written with the binary encoding.

use crate::fixture::{builtin_fixtures, FixtureSpec};
use graphdef_core::Encoding;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Settings file name, looked up in the generator's crate directory
pub const SETTINGS_FILE_NAME: &str = "fixtures.ron";

/// Output directory used when the settings do not name one
pub const DEFAULT_OUTPUT_DIR: &str = "fixtures";

/// Fixture generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSettings {
    /// Format version
    pub version: u32,
    /// Output directory, relative to the generator's crate directory
    pub output_dir: Option<PathBuf>,
    /// Encoding for every fixture
    pub encoding: Encoding,
    /// Fixtures to write, in order
    pub fixtures: Vec<FixtureSpec>,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            output_dir: None,
            encoding: Encoding::default(),
            fixtures: builtin_fixtures(),
        }
    }
}

impl FixtureSettings {
    /// Load settings from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: FixtureSettings = ron::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Settings version {} is newer than supported version {}",
                    settings.version, SETTINGS_FORMAT_VERSION
                ),
            ));
        }

        Ok(settings)
    }

    /// Load settings from a file, or use the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> std::io::Result<Self> {
        if path.exists() {
            tracing::debug!("Loading fixture settings from {:?}", path);
            Self::load(path)
        } else {
            tracing::debug!("No settings at {:?}, using built-in fixtures", path);
            Ok(Self::default())
        }
    }

    /// Save settings to a file
    #[allow(dead_code)] // Used to author settings files and in tests
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        let content = ron::ser::to_string_pretty(self, config).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;

        std::fs::write(path, content)
    }

    /// Resolve the output directory against a base directory
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.join(DEFAULT_OUTPUT_DIR),
        }
    }
}
