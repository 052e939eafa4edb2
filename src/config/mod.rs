use crate::core::aggregate::{KcalPerMl, Policy};
use crate::core::aggregate::window::Window;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Fixed offset (minutes) added to UTC to obtain the reference "now".
    /// The logger runs wherever the parents are; no DST handling.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i64,

    /// Windowing for bowel-movement counts: "trailing" (last 24 h) or "day"
    /// (current calendar day).
    #[serde(default = "default_bowel_window")]
    pub bowel_window: String,

    /// Calorie coefficients per milk type (kcal/ml).
    #[serde(default)]
    pub kcal_per_ml: KcalPerMl,
}

fn default_utc_offset() -> i64 {
    0
}

fn default_bowel_window() -> String {
    "trailing".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            utc_offset_minutes: default_utc_offset(),
            bowel_window: default_bowel_window(),
            kcal_per_ml: KcalPerMl::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("carelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".carelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("carelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("carelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that fails to parse is reported and replaced by defaults
    /// (run `carelog config --check` to see what is wrong).
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Configuration file {} is not readable ({}), using defaults.",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file {} ({}), using defaults.",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// The aggregation policy derived from this configuration.
    pub fn policy(&self) -> Policy {
        let bowel_window = match self.bowel_window.trim() {
            "day" | "calendar" => Window::CalendarDay,
            _ => Window::Trailing24h,
        };
        Policy {
            kcal_per_ml: self.kcal_per_ml,
            bowel_window,
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
