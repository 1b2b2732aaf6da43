use std::net::SocketAddr;

use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prona_portal::{
    config::Config,
    middleware::rate_limit::{create_global_governor, log_request},
    routes, AppError, AppResult, AppState,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prona_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = Config::from_env()?;
    tracing::info!(backend = %config.backend_api_url, "Starting server at {}", config.server_addr());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

    let state = AppState::new(config)?;

    let app = routes::create_router(state)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(create_global_governor()?);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server listening on {}", addr);

    // Connect info feeds both the per-IP governor and request logging
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Internal(format!("Server stopped: {}", e)))
}
