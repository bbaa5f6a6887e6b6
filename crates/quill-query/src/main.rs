//! Query service entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use quill_event_log::HttpEventLog;
use quill_service::config::ServiceConfig;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use quill_query::state::AppState;
use quill_query::store::PgViewStore;
use quill_query::{replay, routes};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    quill_service::telemetry::init_tracing();

    tracing::info!("Starting Quill query service");

    let config = ServiceConfig::from_env(4002)?;

    // The store is the only fatal dependency: no pool, no service.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let log = Arc::new(HttpEventLog::new(config.event_log_url.clone())?);
    let app_state = AppState::new(Arc::new(PgViewStore::new(pool)));

    // Re-derive the view from the full history before serving reads.
    replay::run(log.as_ref(), &app_state.projector).await;

    let app = Router::new()
        .merge(quill_service::health::router())
        .merge(routes::posts::router())
        .merge(routes::events::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
