//! Configuration settings for ytscribe.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub extraction: ExtractionSettings,
    pub response: ResponseSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Subtitle extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    /// Subtitle languages to try, in preference order.
    pub preferred_languages: Vec<String>,
    /// Subtitle track format to select (vtt).
    pub subtitle_format: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            preferred_languages: vec![
                "en".to_string(),
                "en-US".to_string(),
                "en-GB".to_string(),
            ],
            subtitle_format: "vtt".to_string(),
        }
    }
}

/// Response shaping settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResponseSettings {
    /// Return the raw subtitle document by default instead of the
    /// cleaned transcript. Requests may override this per call.
    pub raw: bool,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::YtscribeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ytscribe")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(
            settings.extraction.preferred_languages,
            vec!["en", "en-US", "en-GB"]
        );
        assert_eq!(settings.extraction.subtitle_format, "vtt");
        assert!(!settings.response.raw);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.extraction.preferred_languages = vec!["de".to_string()];
        settings.response.raw = true;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.extraction.preferred_languages, vec!["de"]);
        assert!(loaded.response.raw);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = PathBuf::from("/nonexistent/ytscribe/config.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.extraction.subtitle_format, "vtt");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[response]\nraw = true\n").unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert!(loaded.response.raw);
        assert_eq!(loaded.general.log_level, "info");
    }
}
