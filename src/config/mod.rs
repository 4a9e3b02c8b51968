use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_employer_name")]
    pub employer_name: String,
    #[serde(default = "default_employer_cnpj")]
    pub employer_cnpj: String,
    #[serde(default = "default_employer_address")]
    pub employer_address: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also append every CLI punch to the remote `time_entries` table
    /// (source of the monthly espelho).
    #[serde(default = "default_remote_mirror")]
    pub remote_mirror: bool,
}

fn default_output_dir() -> String {
    Config::config_dir()
        .join("documentos")
        .to_string_lossy()
        .to_string()
}
fn default_admin_username() -> String {
    "admin".to_string()
}
fn default_admin_password() -> String {
    "admin123".to_string()
}
fn default_employer_name() -> String {
    "NOME DA EMPRESA".to_string()
}
fn default_employer_cnpj() -> String {
    "XX.XXX.XXX/XXXX-XX".to_string()
}
fn default_employer_address() -> String {
    "ENDEREÇO DA EMPRESA".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_remote_mirror() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            output_dir: default_output_dir(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            employer_name: default_employer_name(),
            employer_cnpj: default_employer_cnpj(),
            employer_address: default_employer_address(),
            log_level: default_log_level(),
            remote_mirror: default_remote_mirror(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };

        match base {
            Some(dir) if cfg!(target_os = "windows") => dir.join("rponto"),
            Some(dir) => dir.join(".rponto"),
            None => PathBuf::from(".rponto"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rponto.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rponto.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Render the configuration as YAML (used by `config --print`).
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

