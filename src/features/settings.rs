//! Application settings
//!
//! Read once at startup. Only configuration lives here (asset locations,
//! language, timing); nothing the user does at runtime is written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Where the images and the song are found
    #[serde(default)]
    pub assets: AssetSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Playback settings
    #[serde(default)]
    pub playback: PlaybackSettings,
    /// Avatar giggle timing
    #[serde(default)]
    pub giggle: GiggleSettings,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Asset file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory holding every asset (relative paths resolve against the working dir)
    pub dir: PathBuf,
    /// Song played by the player card
    pub audio: String,
    /// Avatar in the top-left corner that opens the apology
    pub avatar: String,
    /// Photo on the player card
    pub photo: String,
}

impl AssetSettings {
    /// Full path of a file inside the assets directory
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn audio_path(&self) -> PathBuf {
        self.resolve(&self.audio)
    }

    pub fn avatar_path(&self) -> PathBuf {
        self.resolve(&self.avatar)
    }

    pub fn photo_path(&self) -> PathBuf {
        self.resolve(&self.photo)
    }
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Interface language code ("ar" or "en")
    pub language: String,
    /// Power saving mode - disables the giggle and dialog fades
    pub power_saving_mode: bool,
}

/// Playback-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume level (0.0 to 1.0)
    pub volume: f32,
    /// Seconds jumped by the skip buttons
    pub skip_secs: f64,
}

/// Giggle timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GiggleSettings {
    /// Seconds between two giggles
    pub interval_secs: u64,
    /// How long one giggle lasts
    pub duration_ms: u64,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            audio: "song.mp3".to_string(),
            avatar: "avatar.png".to_string(),
            photo: "photo.jpg".to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            language: "ar".to_string(),
            power_saving_mode: false,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            skip_secs: 5.0,
        }
    }
}

impl Default for GiggleSettings {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            duration_ms: 1000,
        }
    }
}

impl GiggleSettings {
    pub fn interval(&self) -> std::time::Duration {
        // A zero interval would make iced tick as fast as it can
        std::time::Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "apology-card", "ApologyCard")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    ///
    /// A missing file is replaced by the defaults, written out as a template
    /// to edit. An unreadable or invalid file is left untouched.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(&path) {
                Ok(()) => tracing::info!("Wrote default settings to {:?}", path),
                Err(e) => tracing::debug!("Could not write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.language, "ar");
        assert_eq!(settings.playback.skip_secs, 5.0);
        assert_eq!(settings.giggle.interval(), std::time::Duration::from_secs(10));
        assert_eq!(settings.giggle.duration(), std::time::Duration::from_secs(1));
        assert_eq!(
            settings.assets.audio_path(),
            PathBuf::from("assets").join("song.mp3")
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "language": "en" } }"#).unwrap();
        assert_eq!(settings.display.language, "en");
        assert!(!settings.display.power_saving_mode);
        assert_eq!(settings.giggle.interval_secs, 10);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "assets": { "dir": "x" } }"#).unwrap();
        assert_eq!(settings.assets.dir, PathBuf::from("x"));
        assert_eq!(settings.assets.audio, "song.mp3");
        assert_eq!(settings.assets.photo_path(), PathBuf::from("x").join("photo.jpg"));

        let settings: Settings =
            serde_json::from_str(r#"{ "playback": { "skip_secs": 10 } }"#).unwrap();
        assert_eq!(settings.playback.skip_secs, 10.0);
        assert_eq!(settings.playback.volume, 1.0);

        let settings: Settings =
            serde_json::from_str(r#"{ "giggle": { "duration_ms": 500 } }"#).unwrap();
        assert_eq!(settings.giggle.interval_secs, 10);
        assert_eq!(settings.giggle.duration(), std::time::Duration::from_millis(500));

        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "power_saving_mode": true } }"#).unwrap();
        assert_eq!(settings.display.language, "ar");
        assert!(settings.display.power_saving_mode);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let giggle = GiggleSettings {
            interval_secs: 0,
            duration_ms: 1000,
        };
        assert_eq!(giggle.interval(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("apology-card-settings-{}", std::process::id()))
            .join("settings.json");

        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        settings.assets.dir = PathBuf::from("/tmp/card-assets");
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.power_saving_mode);
        assert_eq!(loaded.assets.dir, PathBuf::from("/tmp/card-assets"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_file(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
