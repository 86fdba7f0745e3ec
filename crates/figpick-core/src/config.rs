//! Configuration resolution for figpick.
//!
//! Resolution order:
//! 1. Built-in defaults
//! 2. Settings file (`~/.config/figpick/settings.json`)
//! 3. `FIGPICK_*` environment variables (highest priority)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete figpick configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for figure files.
    pub figures_dir: PathBuf,
    /// Editor launched on the chosen figure.
    pub editor: String,
    /// Prompt text shown by the selector.
    pub prompt: String,
    /// Fuzzy matching toggle for the selector.
    pub fuzzy: bool,
    /// File extensions treated as figures (matched case-insensitively).
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            figures_dir: PathBuf::from("figures"),
            editor: "inkscape".to_string(),
            prompt: "Figure".to_string(),
            fuzzy: true,
            extensions: vec!["svg".to_string()],
        }
    }
}

impl Config {
    /// Path to the config directory: `~/.config/figpick/`.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("figpick"))
    }

    /// Path to the settings file: `~/.config/figpick/settings.json`.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("settings.json"))
    }

    /// Load the settings file and apply environment overrides. Falls back to
    /// defaults when the file is missing or invalid.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .and_then(|p| Self::from_path(&p).ok())
            .unwrap_or_default();
        apply_env_overrides(&mut config);
        config
    }

    /// Parse a settings file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the settings file, creating the config directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = std::env::var("FIGPICK_FIGURES_DIR") {
        config.figures_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("FIGPICK_EDITOR") {
        config.editor = val;
    }
    if let Ok(val) = std::env::var("FIGPICK_PROMPT") {
        config.prompt = val;
    }
    if let Ok(val) = std::env::var("FIGPICK_FUZZY") {
        if let Ok(fuzzy) = val.parse() {
            config.fuzzy = fuzzy;
        }
    }
    if let Ok(val) = std::env::var("FIGPICK_EXTENSIONS") {
        let extensions = parse_extensions(&val);
        if !extensions.is_empty() {
            config.extensions = extensions;
        }
    }
}

/// Parse a comma-separated extension list (`"svg,pdf"`), dropping blanks
/// and a leading dot.
fn parse_extensions(val: &str) -> Vec<String> {
    val.split(',')
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(ToString::to_string)
        .collect()
}
