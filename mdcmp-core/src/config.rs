//! Configuration management for mdcmp

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::compare::SourceRepo;
use crate::segment::{SplitMode, SplitStrategy};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compare: CompareConfig,
    pub source: SourceRepo,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub split: SplitStrategy,
    pub markdown: bool,
    pub locale: String,
    pub skip_front_matter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total output width in columns
    pub width: u16,
    /// Print the metadata panels above the rows
    pub metadata: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            split: SplitStrategy::DoubleBreak,
            markdown: true,
            locale: "zh-TW".to_string(),
            skip_front_matter: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 120,
            metadata: true,
        }
    }
}

impl CompareConfig {
    pub fn mode(&self) -> SplitMode {
        SplitMode::new(self.split, self.markdown)
    }
}

impl Config {
    /// Get the platform-specific config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdcmp")
            .map(|proj_dirs| proj_dirs.config_dir().join("mdcmp.toml"))
    }

    /// Load configuration from file, falling back to defaults if missing
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        // Check config file permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path)
                .with_context(|| format!("Failed to stat config file: {}", path.display()))?;
            if metadata.permissions().mode() & 0o002 != 0 {
                anyhow::bail!(
                    "Config file {} is world-writable (insecure permissions)",
                    path.display()
                );
            }
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
