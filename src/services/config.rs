use crate::domain::errors::ConfigError;
use crate::domain::models::Config;
use crate::services::change::CoinSystem;
use std::path::{Path, PathBuf};

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/drills/config.toml"))
}

/// Missing `HOME` or a missing file means defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn coin_system(config: &Config) -> Result<CoinSystem, ConfigError> {
    match &config.change.denominations {
        Some(d) => CoinSystem::new(d.clone()),
        None => Ok(CoinSystem::default()),
    }
}
