use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::collaborators::SettingsStore;
use crate::app::infrastructure::error::{AppError, Result};

pub const GEOMETRY_KEY: &str = "geometry";

const GEOMETRY_LEN: usize = 16;

/// Position and size of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 640,
            height: 480,
        }
    }
}

impl WindowGeometry {
    /// Opaque blob for the settings store: four little-endian i32.
    pub fn to_bytes(&self) -> Vec<u8> {
        [self.x, self.y, self.width, self.height]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != GEOMETRY_LEN {
            return Err(AppError::Settings(format!(
                "geometry blob has {} bytes, expected {}",
                bytes.len(),
                GEOMETRY_LEN
            )));
        }
        let field = |i: usize| {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
            i32::from_le_bytes(raw)
        };
        let geometry = Self {
            x: field(0),
            y: field(1),
            width: field(2),
            height: field(3),
        };
        if geometry.width <= 0 || geometry.height <= 0 {
            return Err(AppError::Settings(format!(
                "geometry has non-positive size {}x{}",
                geometry.width, geometry.height
            )));
        }
        Ok(geometry)
    }
}

/// Settings file: a flat JSON object of key -> base64 bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppSettings {
    values: BTreeMap<String, String>,
}

impl AppSettings {
    /// Load settings from the default location, or start empty.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Missing or unreadable files yield empty settings.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("slatepad");
        path.push("settings.json");
        path
    }

    /// Stored window geometry, if present and well-formed.
    pub fn geometry(&self) -> Option<WindowGeometry> {
        let bytes = self.get(GEOMETRY_KEY)?;
        match WindowGeometry::from_bytes(&bytes) {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                tracing::warn!("Ignoring stored geometry: {}", e);
                None
            }
        }
    }

    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.set(GEOMETRY_KEY, &geometry.to_bytes());
    }
}

impl SettingsStore for AppSettings {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let encoded = self.values.get(key)?;
        STANDARD.decode(encoded).ok()
    }

    fn set(&mut self, key: &str, value: &[u8]) {
        self.values.insert(key.to_string(), STANDARD.encode(value));
    }
}
