use serde::Deserialize;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::StoreResult;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub airports_csv: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

fn default_host() -> IpAddr { IpAddr::from([0, 0, 0, 0]) }
fn default_port() -> u16 { 5000 }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }
fn default_index_file() -> PathBuf { PathBuf::from("templates/index.html") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            index_file: default_index_file(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    pub fn load() -> StoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYBOARD__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("SKYBOARD").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Builds a config from an inline TOML document, without touching the
    /// filesystem or environment.
    pub fn from_toml(source: &str) -> StoreResult<Self> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_keys() {
        let config = Config::from_toml(
            r#"
            [data]
            airports_csv = "data/airport_codes.csv"
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.data.airports_csv, PathBuf::from("data/airport_codes.csv"));
        assert_eq!(config.web.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_missing_data_path_is_rejected() {
        let result = Config::from_toml("[server]\nport = 8080\n");
        assert!(matches!(result, Err(crate::StoreError::Config(_))));
    }
}
