use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// Dataset path used when no --dataset flag is given.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default = "default_output")]
    pub output: OutputMode,
}

fn default_output() -> OutputMode {
    OutputMode::Text
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            output: default_output(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Text,
    Json,
}

pub fn load_config() -> Result<Config> {
    let proj_dirs = ProjectDirs::from("org", "courser", "courser");
    let config_path = if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
