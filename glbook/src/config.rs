//! Window settings loaded from an optional JSON file.
//!
//! Every chapter reads the same `settings.json` so the whole work-through
//! can be pointed at a different window size or vsync mode without edits.

use std::path::PathBuf;

use serde::Deserialize;

/// Window settings shared by every chapter program.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl Settings {
    /// Parses settings from a JSON string. Missing fields keep their
    /// default values.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// The per-user settings file, `<config dir>/glbook/settings.json`.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glbook").join("settings.json"))
    }

    /// Loads the settings file, falling back to defaults when it does not
    /// exist. A file that exists but cannot be read or parsed is an error,
    /// so callers can report it and carry on with defaults.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert!(!settings.fullscreen);
        assert!(settings.vsync);
    }

    #[test]
    fn test_full_json() {
        let settings =
            Settings::from_json(r#"{"width":1280,"height":720,"fullscreen":true,"vsync":false}"#)
                .unwrap();
        assert_eq!(
            settings,
            Settings {
                width: 1280,
                height: 720,
                fullscreen: true,
                vsync: false
            }
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"width":1024}"#).unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 600);
        assert!(!settings.fullscreen);
        assert!(settings.vsync);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{"width":"wide"}"#).is_err());
    }
}
