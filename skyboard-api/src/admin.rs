use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/admin/reload", post(reload_airports))
}

/// POST /api/admin/reload
/// Re-reads the data file and swaps it in once fully parsed.
pub async fn reload_airports(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let table = state.airports.clone();
    let path = state.data_path.clone();

    let count = tokio::task::spawn_blocking(move || table.reload(&path)).await??;

    Ok(Json(json!({ "airports": count })))
}
