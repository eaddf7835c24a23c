use std::{
    fs::{create_dir_all, File},
    io::{BufReader, Write},
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use tabmaker::TabError;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    tabs_folder: Option<PathBuf>,
    default_bpm: Option<u32>,
}

impl Config {
    // folder placed in $HOME directory
    const FOLDER: &'static str = ".tabmaker";

    pub fn get_tabs_folder(&self) -> Option<PathBuf> {
        self.tabs_folder.clone()
    }

    pub const fn get_default_bpm(&self) -> Option<u32> {
        self.default_bpm
    }

    fn get_base_path() -> Result<PathBuf, TabError> {
        let home = home_dir()
            .ok_or_else(|| TabError::ConfigError("Could not find home directory".to_string()))?;
        Ok(home.join(Self::FOLDER))
    }

    fn get_path() -> Result<PathBuf, TabError> {
        let base = Self::get_base_path()?;
        Ok(base.join("config.json"))
    }

    /// Creates config if it does not exist
    pub fn read_config() -> Result<Self, TabError> {
        let base_path = Self::get_base_path()?;
        if !base_path.exists() {
            create_dir_all(base_path)?;
        }
        let config_path = Self::get_path()?;
        if !config_path.exists() {
            log::info!("Creating default configuration at {config_path:?}");
            Self::default().save_config()?;
        }
        let file = File::open(config_path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader).map_err(|err| {
            TabError::ConfigError(format!("Could not read local configuration {err:}"))
        })?;
        Ok(config)
    }

    /// Assumes the config folder exists
    pub fn save_config(&self) -> Result<(), TabError> {
        let config_path = Self::get_path()?;
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            TabError::ConfigError(format!("Could not save local configuration {err:}"))
        })?;
        let mut file = File::create(config_path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
