use crate::errors::{AppError, AppResult};
use crate::models::gap_order::GapOrder;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Tunables shared by the parser, the gap analyzer and the renderer.
///
/// Built once per run (file defaults merged with CLI overrides) and then
/// handed out by reference, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    #[serde(default)]
    pub min_gap_ms: i64,
    #[serde(default = "default_bar_multiplier")]
    pub bar_multiplier: usize,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub order: GapOrder,
}

fn default_max_message_length() -> usize {
    10000
}
fn default_bar_multiplier() -> usize {
    40
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            min_gap_ms: 0,
            bar_multiplier: default_bar_multiplier(),
            color: default_color(),
            order: GapOrder::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rloggap")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rloggap")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rloggap.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file is not an error: defaults are returned instead.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        log::debug!("loaded config from {:?}", path);
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;

        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Reject values that would make the output meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_message_length == 0 {
            return Err(AppError::Config(
                "max_message_length must be greater than 0".into(),
            ));
        }
        if self.bar_multiplier == 0 {
            return Err(AppError::Config(
                "bar_multiplier must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
