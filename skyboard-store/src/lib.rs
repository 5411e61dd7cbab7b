use std::path::PathBuf;

pub mod app_config;
pub mod loader;
pub mod table;

pub use loader::{load_airports, read_airports};
pub use table::AirportTable;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Airport data file not found at {}", .0.display())]
    MissingDataFile(PathBuf),
    #[error("Failed to parse airport data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type StoreResult<T> = Result<T, StoreError>;
