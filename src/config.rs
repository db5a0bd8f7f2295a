use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub max_units: Option<usize>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_units: None,
            log_level: "warn".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let mut path =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    path.push(".durphrase");
    path.push("config.json");
    Ok(path)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Reads the config at `path`, writing the defaults there first if it is missing.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = Config::default();
        let data = serde_json::to_string_pretty(&config)?;
        fs::write(path, data)?;
        return Ok(config);
    }

    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.json");

        let config = load_config_from(&path)?;
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_config_from(&path)?;
        assert_eq!(reloaded, config);
        Ok(())
    }

    #[test]
    fn test_load_config_partial() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "max_units": 2 }"#)?;

        let config = load_config_from(&path)?;
        assert_eq!(config.max_units, Some(2));
        assert_eq!(config.log_level, "warn");
        Ok(())
    }

    #[test]
    fn test_load_config_invalid() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "not json")?;

        assert!(load_config_from(&path).is_err());
        Ok(())
    }
}
