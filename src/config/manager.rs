use super::{ga::GaConfig, maze::MazeConfig, traits::ConfigSection};
use crate::error::MazevolveError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub ga: GaConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MazevolveError> {
        self.maze.validate()?;
        self.ga.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MazevolveError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MazevolveError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| MazevolveError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MazevolveError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| MazevolveError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| MazevolveError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), MazevolveError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.ga.pop_size, config.ga.pop_size);
        assert_eq!(parsed.maze.rows, config.maze.rows);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.ga.mut_rate = 2.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let parsed: AppConfig = toml::from_str("[maze]\nrows = 17\ncols = 21\n").unwrap();
        assert_eq!(parsed.maze.rows, 17);
        assert_eq!(parsed.ga.pop_size, GaConfig::default().pop_size);
    }
}
