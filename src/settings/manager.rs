use std::fs;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use crate::settings::config::Settings;

/// Shared handle to the process-wide editor settings. Each process loads
/// its settings once; every tool holds the same instance, so an update is
/// visible on the next call without re-plumbing anything.
#[derive(Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    inner: Arc<Mutex<Settings>>,
}

impl SettingsManager {
    /// Create a settings manager with the default settings location.
    pub fn new() -> Result<Self> {
        Self::from_path(Self::default_settings_path()?)
    }

    /// Create a settings manager from a specific path, writing a default
    /// settings file if none exists yet.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }
            let contents = toml::to_string_pretty(&Settings::default())
                .context("Failed to serialize default settings")?;
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write default settings to {path:?}"))?;
        }

        let loaded = Self::load_from_file_with_backup(&path)?;

        Ok(Self {
            settings_path: path,
            inner: Arc::new(Mutex::new(loaded)),
        })
    }

    /// Default settings path (~/.patchbay/settings.toml).
    fn default_settings_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".patchbay").join("settings.toml"))
    }

    /// Load settings from a TOML file, moving a corrupted file aside and
    /// starting over from defaults rather than refusing to start.
    fn load_from_file_with_backup(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let backup_path = path.with_extension("toml.backup");
                fs::rename(path, &backup_path).with_context(|| {
                    format!("Failed to back up corrupted settings to {backup_path:?}")
                })?;

                let default_settings = Settings::default();
                let contents = toml::to_string_pretty(&default_settings)
                    .context("Failed to serialize default settings")?;
                fs::write(path, contents)
                    .with_context(|| format!("Failed to write default settings to {path:?}"))?;

                Ok(default_settings)
            }
        }
    }

    /// Get the in-memory settings.
    pub fn settings(&self) -> Settings {
        self.inner.lock().unwrap().clone()
    }

    /// Update in-memory settings. Not persisted until `save` is called.
    pub fn update_setting<F>(&self, updater: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self.inner.lock().unwrap();
        updater(guard.deref_mut());
    }

    /// Persist the in-memory settings to disk.
    pub fn save(&self) -> Result<()> {
        let settings = self.settings();
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        let contents = toml::to_string_pretty(&settings).context("Failed to serialize settings")?;
        fs::write(&self.settings_path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.settings_path))?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_file_when_missing() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.toml");

        let manager = SettingsManager::from_path(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(manager.settings(), Settings::default());
    }

    #[test]
    fn saves_and_reloads_updates() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.toml");

        let manager = SettingsManager::from_path(path.clone()).unwrap();
        manager.update_setting(|settings| settings.ignore_dirs = vec![".git".to_string()]);
        manager.save().unwrap();

        let reloaded = SettingsManager::from_path(path).unwrap();
        assert_eq!(reloaded.settings().ignore_dirs, vec![".git".to_string()]);
    }

    #[test]
    fn corrupted_file_is_backed_up_and_replaced() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "not = [valid toml").unwrap();

        let manager = SettingsManager::from_path(path.clone()).unwrap();
        assert_eq!(manager.settings(), Settings::default());
        assert!(path.with_extension("toml.backup").exists());
    }
}
