use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_studio_name")]
    pub studio_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
    #[serde(default = "default_true")]
    pub show_notes: bool,
}

fn default_studio_name() -> String {
    "InkMaster Studio".to_string()
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_hourly_rate() -> f64 {
    150.0
}
fn default_recent_limit() -> usize {
    3
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            studio_name: default_studio_name(),
            currency: default_currency(),
            hourly_rate: default_hourly_rate(),
            recent_limit: default_recent_limit(),
            seed_demo_data: true,
            show_notes: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".inkmaster")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("inkmaster.conf")
    }

    /// Load the configuration from `path`, or from the standard location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Yaml(y) => AppError::Config(format!("{}: {}", path.display(), y)),
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.check()?;
        Ok(cfg)
    }

    fn check(&self) -> AppResult<()> {
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(AppError::Config(format!(
                "hourly_rate must be a non-negative number, got {}",
                self.hourly_rate
            )));
        }
        Ok(())
    }

    /// Write the default configuration file. Returns the path written.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Format an amount with the configured currency symbol.
    pub fn money(&self, amount: f64) -> String {
        crate::utils::formatting::money(&self.currency, amount)
    }
}
