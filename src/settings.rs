//! Placement settings
//!
//! Only the footprint and padding feed the placer. Stored as JSON next to
//! the host binary; a missing or broken file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BOUNDS_PADDING, ITEM_FOOTPRINT_SIZE};
use crate::error::SettingsError;

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of an item's square footprint
    pub item_footprint_size: f32,
    /// Gap kept between items and the drawer edge
    pub bounds_padding: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            item_footprint_size: ITEM_FOOTPRINT_SIZE,
            bounds_padding: BOUNDS_PADDING,
        }
    }
}

impl Settings {
    /// Check both values are usable by the placer
    pub fn validate(&self) -> Result<(), SettingsError> {
        let size = self.item_footprint_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(SettingsError::InvalidFootprint(size));
        }
        let padding = self.bounds_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(SettingsError::InvalidPadding(padding));
        }
        Ok(())
    }

    /// Half the footprint, the distance from an item's centre to its edge
    pub fn half_footprint(&self) -> f32 {
        self.item_footprint_size * 0.5
    }

    /// Parse and validate settings JSON (absent fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
