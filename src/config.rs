use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub predictor_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let predictor_url = lookup("PREDICTOR_URL").unwrap_or_else(|| DEFAULT_PREDICTOR_URL.to_string());
        let predictor_url = predictor_url.trim_end_matches('/').to_string();
        if !(predictor_url.starts_with("http://") || predictor_url.starts_with("https://")) {
            return Err(AppError::Config(format!("Invalid predictor URL: {}", predictor_url)));
        }

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            predictor_url,
        })
    }
}
