use anyhow::Context;
use skyboard_api::{app, AppState};
use skyboard_store::{app_config::Config, AirportTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyboard_api=debug,skyboard_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let airports = AirportTable::load(&config.data.airports_csv)
        .context("Failed to load airport data")?;
    tracing::info!("Serving {} airports", airports.len());

    let app_state = AppState::new(airports, config.data.airports_csv.clone(), config.web.clone());
    let app = app(app_state);

    let addr = config.server.addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
