use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use iced::Theme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_name: String,
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: Theme::Light.to_string(),
            log_filter: "info".to_string(),
            window_width: 1400.0,
            window_height: 800.0,
        }
    }
}

impl Config {
    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or(Theme::Light)
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Reads `config.json`. A missing file is not an error and yields defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from(path)
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    save_config_to(Path::new(CONFIG_FILE), config)
}

/// Looks a theme up by its display name, ignoring case.
pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| t.to_string().eq_ignore_ascii_case(name))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn saved_config_loads_back() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            theme_name: "Nord".to_string(),
            ..Config::default()
        };
        save_config_to(&path, &config).expect("save config");
        let loaded = load_config_from(&path).expect("load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme(), Theme::Nord);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "theme_name": "dracula" }"#).expect("write config");
        let loaded = load_config_from(&path).expect("load config");
        assert_eq!(loaded.theme(), Theme::Dracula);
        assert_eq!(loaded.log_filter, "info");
        assert_eq!(loaded.window_width, 1400.0);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ theme").expect("write config");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn save_into_missing_directory_reports_the_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("absent").join(CONFIG_FILE);
        match save_config_to(&path, &Config::default()) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_theme_name_falls_back_to_light() {
        let config = Config {
            theme_name: "Neon".to_string(),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::Light);
    }
}
