use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_allow_overnight")]
    pub allow_overnight: bool,
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    #[serde(default = "default_max_weekly_hours")]
    pub max_weekly_hours: f64,
    #[serde(default = "default_currency")]
    pub default_currency: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_allow_overnight() -> bool {
    true
}
fn default_max_daily_hours() -> f64 {
    24.0
}
fn default_max_weekly_hours() -> f64 {
    168.0
}
fn default_currency() -> String {
    "INR".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            allow_overnight: default_allow_overnight(),
            max_daily_hours: default_max_daily_hours(),
            max_weekly_hours: default_max_weekly_hours(),
            default_currency: default_currency(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("rtimesheet.sqlite")
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                AppError::from(io::Error::new(
                    e.kind(),
                    format!("cannot create {}: {}", db_path.display(), e),
                ))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
