use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User configuration. Every section and key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SealnoteConfig {
    pub security: SecuritySection,
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    /// Password prompts allowed before unlocking gives up.
    pub max_unlock_attempts: u32,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            max_unlock_attempts: 3,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub editor: Option<String>,
    pub ascii: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config at `explicit`, or the default location.
///
/// A missing default file yields the defaults; a missing explicit file is
/// an error.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<SealnoteConfig> {
    match explicit {
        Some(path) => read_config(Path::new(path)),
        None => {
            let path = default_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                Ok(SealnoteConfig::default())
            }
        }
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<SealnoteConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealnote"));
        }
    }
    Ok(home_dir()?.join(".config").join("sealnote"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
