use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::GridSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores [`GridSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory.
    pub fn with_default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "broadcast-grid", "broadcast-grid")
            .ok_or_else(|| anyhow!("Could not determine a configuration directory"))?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(GridSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings = GridSettings::from_toml(&content)
            .with_context(|| format!("Invalid settings in {}", self.path.display()))?;

        log::debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let content = settings
            .to_toml()
            .context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}
