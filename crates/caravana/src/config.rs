use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "caravana";

pub const KEYS: [&str; 4] = [
    "defaults.assets",
    "defaults.start_muted",
    "defaults.auto_advance",
    "defaults.windowed",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory the `/assets/...` paths are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_muted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid value for {key}: {value}. Must be 'true' or 'false'."),
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `caravana config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("using default config: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Caravana configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.assets" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Invalid assets directory: value must not be empty.");
                }
                defaults.assets = Some(value.to_string());
            }
            "defaults.start_muted" => defaults.start_muted = Some(parse_bool(key, value)?),
            "defaults.auto_advance" => defaults.auto_advance = Some(parse_bool(key, value)?),
            "defaults.windowed" => defaults.windowed = Some(parse_bool(key, value)?),
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn assets(&self) -> Option<PathBuf> {
        self.defaults
            .as_ref()
            .and_then(|d| d.assets.as_deref())
            .map(PathBuf::from)
    }

    pub fn start_muted(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.start_muted)
            .unwrap_or(true)
    }

    pub fn auto_advance(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.auto_advance)
            .unwrap_or(true)
    }

    pub fn windowed(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::default();
        assert!(config.start_muted());
        assert!(config.auto_advance());
        assert!(!config.windowed());
        assert_eq!(config.assets(), None);
    }

    #[test]
    fn test_set_valid_keys() {
        let mut config = Config::default();
        config.set("defaults.assets", "/srv/caravana/public").unwrap();
        config.set("defaults.start_muted", "false").unwrap();
        config.set("defaults.auto_advance", "off").unwrap();
        config.set("defaults.windowed", "yes").unwrap();
        assert_eq!(config.assets(), Some(PathBuf::from("/srv/caravana/public")));
        assert!(!config.start_muted());
        assert!(!config.auto_advance());
        assert!(config.windowed());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_err());
        assert!(config.set("defaults.windowed", "maybe").is_err());
        assert!(config.set("defaults.assets", "  ").is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "defaults:\n  assets: ./public\n  auto_advance: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.assets(), Some(PathBuf::from("./public")));
        assert!(!config.auto_advance());
        assert!(config.start_muted());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("caravana-config-{}", std::process::id()))
            .join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.windowed", "true").unwrap();
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_message() {
        let err = Config::load_from(Path::new("/nonexistent/caravana.yaml")).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
