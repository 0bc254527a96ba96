use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::error::PasslistError;
use crate::seed::seed_entries;
use crate::store::{CredentialEntry, IconRef};

const CONFIG_DIR: &str = ".passlist";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print `********` instead of secrets in list output.
    #[serde(default = "default_mask")]
    pub mask_secrets: bool,
    /// Replaces the built-in seed list when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<SeedEntry>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SeedEntry {
    pub name: String,
    pub secret: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl From<&CredentialEntry> for SeedEntry {
    fn from(entry: &CredentialEntry) -> Self {
        Self {
            name: entry.name.clone(),
            secret: entry.secret.expose_secret().clone(),
            icon: Some(entry.icon.as_str().to_string()),
            favorite: entry.is_favorite,
        }
    }
}

fn default_mask() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mask_secrets: default_mask(),
            entries: Vec::new(),
        }
    }
}

impl Config {
    /// Entries a new store starts with.
    pub fn seed(&self) -> Vec<CredentialEntry> {
        if self.entries.is_empty() {
            return seed_entries();
        }
        self.entries
            .iter()
            .map(|e| {
                let icon = e.icon.as_deref().map(IconRef::new).unwrap_or_default();
                CredentialEntry::new(icon, e.name.as_str(), &e.secret, e.favorite)
            })
            .collect()
    }
}

/// Returns the config file path for a given project root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Parse config from an explicit file. A missing file is an error.
pub fn read_file(path: &Path) -> Result<Config, PasslistError> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| PasslistError::Config(e.to_string()))
}

/// Read config from the given project root, falling back to defaults if none exists.
pub fn read(project_root: &Path) -> Result<Config, PasslistError> {
    let path = config_path(project_root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_file(&path)
}

/// Write config to the given project root. Creates the `.passlist` directory if needed.
pub fn write(project_root: &Path, config: &Config) -> Result<(), PasslistError> {
    let dir = project_root.join(CONFIG_DIR);
    std::fs::create_dir_all(&dir)?;
    let raw = toml::to_string(config).map_err(|e| PasslistError::Serialization(e.to_string()))?;
    std::fs::write(dir.join(CONFIG_FILE), raw)?;
    Ok(())
}

/// Load the config named on the command line, or the one under the current directory.
pub fn load(explicit: Option<&Path>) -> Result<Config, PasslistError> {
    match explicit {
        Some(path) => read_file(path),
        None => read(&project_root()?),
    }
}

/// Returns the current project root (cwd).
pub fn project_root() -> Result<PathBuf, PasslistError> {
    std::env::current_dir().map_err(PasslistError::Io)
}
