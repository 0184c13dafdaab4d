// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub video: VideoConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Start with chrome hidden (kiosk fullscreen presentation)
    #[serde(default)]
    pub kiosk_fullscreen: bool,

    /// Show the one-line hotkey hint in the header on launch
    #[serde(default = "default_show_help_hint")]
    pub show_help_hint: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Orientation override: "auto" derives landscape/portrait from the
    /// terminal size; "landscape"/"portrait" force a layout
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Audible feedback (terminal bell) on card activation, the kiosk
    /// analog of haptic touch feedback
    #[serde(default = "default_touch_feedback")]
    pub touch_feedback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Intro video location handed to the external player
    #[serde(default = "default_video_url")]
    pub url: String,

    /// Player commands tried in order when the overlay opens
    #[serde(default = "default_players")]
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional TOML catalog replacing the built-in dataset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_show_help_hint() -> bool {
    true
}

fn default_orientation() -> String {
    "auto".to_string()
}

fn default_touch_feedback() -> bool {
    true
}

fn default_video_url() -> String {
    "https://vimeo.com/466027086".to_string()
}

fn default_players() -> Vec<String> {
    vec!["mpv".to_string(), "ffplay".to_string()]
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            kiosk_fullscreen: false,
            show_help_hint: default_show_help_hint(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            touch_feedback: default_touch_feedback(),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            url: default_video_url(),
            players: default_players(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("faqdash")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("faqdash")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'faqdash init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.startup.kiosk_fullscreen, false);
        assert_eq!(config.startup.show_help_hint, true);
        assert_eq!(config.display.orientation, "auto");
        assert_eq!(config.display.touch_feedback, true);
        assert_eq!(config.video.players, vec!["mpv", "ffplay"]);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be able to deserialize back
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            deserialized.startup.kiosk_fullscreen,
            config.startup.kiosk_fullscreen
        );
        assert_eq!(deserialized.video.url, config.video.url);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [startup]
            kiosk_fullscreen = true
            "#,
        )
        .unwrap();

        assert!(config.startup.kiosk_fullscreen);
        assert_eq!(config.display.orientation, "auto");
        assert!(!config.video.players.is_empty());
    }

    #[test]
    fn test_catalog_path_persistence() {
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("/srv/kiosk/faq.toml"));

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("faq.toml"));

        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            deserialized.catalog.path,
            Some(PathBuf::from("/srv/kiosk/faq.toml"))
        );
    }
}
