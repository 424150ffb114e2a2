//! # Configuration Module
//!
//! Tunable settings for the analysis pipeline: classification thresholds,
//! recap templates and the fallback mood term.
//!
//! ## Location
//!
//! The config file is looked up in this order:
//! 1. `$MOODWRAP_CONFIG`, if set
//! 2. the platform config directory:
//!    - Linux: `~/.config/moodwrap/config.json`
//!    - macOS: `~/Library/Application Support/moodwrap/config.json`
//!    - Windows: `%APPDATA%\moodwrap\config.json`
//!
//! A missing file means stock settings. Every key is optional:
//!
//! ```json
//! {
//!   "rules": { "chill": { "max_tempo": 80.0 } },
//!   "templates": ["{top_artist} carried your {top_mood} year."],
//!   "fallback_mood": "eclectic"
//! }
//! ```

use crate::classifier::MoodRules;
use crate::error::Error;
use crate::summary::{ARTIST_SLOT, DEFAULT_FALLBACK_MOOD, MOOD_SLOT, TEMPLATES};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MOODWRAP_CONFIG";

/// Returns the platform-appropriate config file path.
///
/// Does not create anything; the file is optional.
///
/// # Errors
///
/// Returns an error if `$MOODWRAP_CONFIG` is unset and the system config
/// directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Set {CONFIG_ENV} to point at a config file."
        )
    })?;

    Ok(config_dir.join("moodwrap").join("config.json"))
}

/// Runtime settings for classification and summary generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classification thresholds
    pub rules: MoodRules,
    /// Recap templates, each containing `{top_mood}` and `{top_artist}`
    pub templates: Vec<String>,
    /// Mood term used when no track could be classified
    pub fallback_mood: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: MoodRules::default(),
            templates: TEMPLATES.iter().map(|t| (*t).to_string()).collect(),
            fallback_mood: DEFAULT_FALLBACK_MOOD.to_string(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or the default location when `None`.
    ///
    /// # Lookup
    ///
    /// - `Some(path)`: the file must exist and is always read.
    /// - `None`: the path comes from [`get_config_path`]. If nothing is there,
    ///   stock settings are returned.
    ///
    /// Keys missing from the file keep their defaults, down to single rule
    /// thresholds.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Validated settings
    /// * `Err(anyhow::Error)` - With the file path in the context chain
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - An explicit `path` does not exist or cannot be read
    /// - The file is not valid JSON for [`Config`]
    /// - The settings fail [`Config::validate`]
    /// - No path was given and the config directory cannot be determined
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodwrap::config::Config;
    ///
    /// let config = Config::load(None)?;
    /// println!("{} templates loaded", config.templates.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = get_config_path()?;
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that the templates can be rendered.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if there are no templates, a template lacks either
    /// slot, or the fallback mood is blank.
    pub fn validate(&self) -> crate::Result<()> {
        if self.templates.is_empty() {
            return Err(Error::Config("at least one template is required".to_string()));
        }

        for (index, template) in self.templates.iter().enumerate() {
            for slot in [MOOD_SLOT, ARTIST_SLOT] {
                if !template.contains(slot) {
                    return Err(Error::Config(format!("template #{index} is missing the {slot} slot")));
                }
            }
        }

        if self.fallback_mood.trim().is_empty() {
            return Err(Error::Config("fallback_mood must not be blank".to_string()));
        }

        Ok(())
    }
}
