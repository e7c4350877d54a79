use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolo";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Snapshot file override; falls back to the store's XDG default.
    pub data_path: Option<PathBuf>,
    /// Save the snapshot after every mutating command, not only on exit.
    pub save_on_change: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            save_on_change: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_path: Option<PathBuf>,
    save_on_change: Option<bool>,
}

/// Loads the config, falling back to defaults when no file exists. A custom
/// path is required to exist; the default path is not.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let defaults = AppConfig::default();
    Ok(Some(AppConfig {
        data_path: parsed.data_path,
        save_on_change: parsed.save_on_change.unwrap_or(defaults.save_on_change),
    }))
}

#[cfg(test)]
mod tests {
    use super::{load, AppConfig, ConfigError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_defaults_when_custom_file_parses_empty_sections() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "save_on_change = false\n").expect("write config");

        let config = load(Some(path)).expect("load config");
        assert!(!config.save_on_change);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn custom_path_must_exist() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("nope.toml");
        match load(Some(missing)) {
            Err(ConfigError::MissingConfigFile(_)) => {}
            other => panic!("expected MissingConfigFile, got {:?}", other),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "no_such_key = 1\n").expect("write config");
        assert!(matches!(load(Some(path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn defaults_save_on_change() {
        assert!(AppConfig::default().save_on_change);
    }
}
