//! Engine settings loaded from JSON.

use crate::appearance::{Appearance, BackgroundKind};
use crate::classify::{RoundStyle, StyleFlags};
use crate::palette::{PaletteOptions, PaletteSet, ThemeColors};
use crate::policy::ShadingPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Everything the engine needs from the host configuration.
///
/// Missing fields take their default values, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub policy: ShadingPolicy,
    pub colors: ThemeColors,
    pub palette: PaletteOptions,
    pub flags: StyleFlags,
    pub round: RoundStyle,
    pub appearance: Appearance,
    pub background: BackgroundKind,
    /// Draw the focus ramp around focused widgets as a glow.
    pub glow_focus: bool,
    /// Draw an etched edge around buttons and entries.
    pub etch: bool,
}

impl EngineSettings {
    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> SettingsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Load settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON file, using defaults if it cannot be read.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            log::warn!("Using default settings: {}", e);
            Self::default()
        })
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SettingsError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Palette options with the appearance-dependent fields filled in.
    pub fn palette_options(&self) -> PaletteOptions {
        PaletteOptions { glass: self.appearance.is_glass(), ..self.palette }
    }

    /// Generate the palette set these settings describe.
    pub fn palettes(&self) -> PaletteSet {
        PaletteSet::generate(&self.colors, &self.palette_options(), &self.policy)
    }
}
