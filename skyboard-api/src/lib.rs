use axum::{http::Method, Router};
use skyboard_store::app_config::WebConfig;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod airports;
pub mod error;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(airports::routes())
        .merge(admin::routes())
        .merge(web_routes(&state.web))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Front-end page and its assets
fn web_routes(web: &WebConfig) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(&web.index_file))
        .nest_service("/static", ServeDir::new(&web.static_dir))
}
