//! Saved store profiles (one store per family member).
//!
//! Profiles live in `~/.config/cinedex/settings.toml`:
//!
//! ```toml
//! [[profiles]]
//! name = "John"
//! path = "john.json"
//! format = "json"
//! ```
//!
//! When the file does not exist the built-in John/Sara/Jack profiles apply.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cinedex_core::StoreFormat;

use crate::error::LibError;

/// A named store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub path: PathBuf,
    /// Explicit format; when absent the file extension decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StoreFormat>,
}

impl Profile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, format: Option<StoreFormat>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            format,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profiles: vec![
                Profile::new("John", "john.json", Some(StoreFormat::Json)),
                Profile::new("Sara", "sara.json", Some(StoreFormat::Json)),
                Profile::new("Jack", "jack.json", Some(StoreFormat::Json)),
            ],
        }
    }
}

impl Settings {
    /// Find a profile by name (case-insensitive) or by its 1-based position.
    pub fn resolve(&self, key: &str) -> Result<&Profile, LibError> {
        let key = key.trim();
        let by_index = key
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.profiles.get(i));
        by_index
            .or_else(|| {
                self.profiles
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(key))
            })
            .ok_or_else(|| LibError::UnknownProfile(key.to_string()))
    }

    /// Insert a profile, replacing any existing one with the same name.
    pub fn upsert(&mut self, profile: Profile) {
        match self
            .profiles
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(&profile.name))
        {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Remove a profile by name. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| !p.name.eq_ignore_ascii_case(name));
        self.profiles.len() != before
    }
}

/// Canonical path to the settings file: `~/.config/cinedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedex").join("settings.toml")
}

/// Load settings from the canonical path.
pub fn load_settings() -> Result<Settings, LibError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, falling back to the defaults if it is missing.
pub fn load_settings_from(path: &Path) -> Result<Settings, LibError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents)
            .map_err(|e| LibError::settings(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(LibError::settings(format!("{}: {}", path.display(), e))),
    }
}

/// Save settings to the canonical path.
pub fn save_settings(settings: &Settings) -> Result<(), LibError> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), LibError> {
    write_settings(path, settings)
        .map_err(|e| LibError::settings(format!("{}: {}", path.display(), e)))
}

fn write_settings(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
