use std::path::PathBuf;
use std::sync::Arc;

use skyboard_store::app_config::WebConfig;
use skyboard_store::AirportTable;

#[derive(Clone)]
pub struct AppState {
    pub airports: Arc<AirportTable>,
    /// Source file re-read by the reload endpoint.
    pub data_path: PathBuf,
    pub web: WebConfig,
}

impl AppState {
    pub fn new(airports: AirportTable, data_path: PathBuf, web: WebConfig) -> Self {
        Self {
            airports: Arc::new(airports),
            data_path,
            web,
        }
    }
}
