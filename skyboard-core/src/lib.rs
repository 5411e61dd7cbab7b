pub mod airport;
pub mod flight;
pub mod search;
pub mod summary;

pub use airport::AirportRecord;
pub use flight::FlightRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
