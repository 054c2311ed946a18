use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Used when `ADMIN_PASSWORD` is not set. Matches the value the bundled
/// admin page ships with, so local setups work out of the box.
pub const DEFAULT_ADMIN_PASSWORD: &str = "njp123";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub admin_password: String,
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:5000".to_string(),
            database_url: None,
            database_max_connections: 10,
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            static_dir: PathBuf::from("frontend"),
            request_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let server_address = match env::var("SERVER_ADDRESS") {
            Ok(addr) => addr,
            Err(_) => {
                let port: u16 = get_env_parse_or("PORT", 5000)?;
                format!("0.0.0.0:{}", port)
            }
        };

        let log_format = match env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            server_address,
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            request_timeout_secs: get_env_parse_or(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            log_format,
        })
    }

    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
