use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "tally";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "inventory.tsv";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Resolution used when laying out label sheets, in dots per inch
    #[serde(default = "default_sheet_dpi")]
    pub sheet_dpi: u32,

    /// Side length of the machine-readable block on each label, in inches
    #[serde(default = "default_label_code_inches")]
    pub label_code_inches: f64,
}

fn default_sheet_dpi() -> u32 {
    300
}

fn default_label_code_inches() -> f64 {
    0.9
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_dpi: default_sheet_dpi(),
            label_code_inches: default_label_code_inches(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the path to the record store's backing file
pub fn store_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(STORE_FILE))
}

/// Get the application data directory for the store and config
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.sheet_dpi, 300);
        assert!(config.label_code_inches > 0.0);
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig { sheet_dpi: 600, label_code_inches: 1.25 };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.sheet_dpi, 600);
        assert_eq!(parsed.label_code_inches, 1.25);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"sheet_dpi": 150}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.sheet_dpi, 150);
        assert_eq!(config.label_code_inches, default_label_code_inches());
    }

    #[test]
    fn test_app_config_empty_json() {
        // Empty object should use all defaults
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.sheet_dpi, 300);
    }

    #[test]
    fn test_store_path_is_under_app_dir() {
        let path = store_path().unwrap();
        assert!(path.ends_with(PathBuf::from(APP_NAME).join(STORE_FILE)));
    }
}
