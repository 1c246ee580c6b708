use crate::cli::output::OutputFormat;
use crate::{Mode, Preset};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub preset: Preset,
    /// Unset means the preset's own default mode
    pub mode: Option<Mode>,
    pub ignore_patterns: Vec<String>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            mode: None,
            ignore_patterns: Vec::new(),
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// One config file. Keys left out of the file leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub preset: Option<Preset>,
    pub mode: Option<Mode>,
    pub ignore_patterns: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub preset: Option<Preset>,
    pub mode: Option<Mode>,
    pub ignore_patterns: Vec<String>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global_path = Self::global_config_path();
        Self::load_from(global_path.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    /// Same as [`Config::load`] with explicit file locations. Missing files are skipped.
    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        for path in global.into_iter().chain([local]) {
            if path.exists() {
                config = config.merge(ConfigFile::from_file(path)?);
            }
        }

        Ok(config.apply(overrides))
    }

    /// The mode in effect: the configured one, or the preset's default.
    pub fn effective_mode(&self) -> Mode {
        self.mode.unwrap_or_else(|| self.preset.default_mode())
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(preset) = file.preset {
            self.preset = preset;
        }
        if file.mode.is_some() {
            self.mode = file.mode;
        }
        if let Some(patterns) = file.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(preset) = overrides.preset {
            self.preset = preset;
        }
        if overrides.mode.is_some() {
            self.mode = overrides.mode;
        }
        if !overrides.ignore_patterns.is_empty() {
            self.ignore_patterns.extend(overrides.ignore_patterns);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
