use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyboard_core::search::{lookup_airport, search_airports, NO_IATA_MESSAGE};
use skyboard_core::summary::{AirportDetail, AirportListing, AirportSummary};
use skyboard_schedule::{FlightGenerator, AIRPORT_DETAIL_FLIGHT_COUNT};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<AirportSummary>,
}

#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub airports: Vec<AirportListing>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/airports", get(list_airports))
        .route("/api/airport", get(missing_iata))
        .route("/api/airport/", get(missing_iata))
        .route("/api/airport/{iata}", get(get_airport))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/search?q=<text>
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default();
    let airports = state.airports.snapshot();

    let results = search_airports(&airports, &query)
        .into_iter()
        .map(AirportSummary::from)
        .collect();

    Json(SearchResponse { results })
}

/// GET /api/airport/{iata}
/// Airport details plus mock departures, seeded by the code.
pub async fn get_airport(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> Result<Json<AirportDetail>, AppError> {
    let code = iata.to_uppercase();
    let airports = state.airports.snapshot();

    let airport = lookup_airport(&airports, &code)?;
    let flights = FlightGenerator::new(&airports).generate(&code, AIRPORT_DETAIL_FLIGHT_COUNT);

    Ok(Json(AirportDetail::new(airport, flights)))
}

async fn missing_iata() -> AppError {
    AppError::ValidationError(NO_IATA_MESSAGE.to_string())
}

/// GET /api/airports
pub async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    let airports = state
        .airports
        .snapshot()
        .iter()
        .map(AirportListing::from)
        .collect();

    Json(AirportsResponse { airports })
}
