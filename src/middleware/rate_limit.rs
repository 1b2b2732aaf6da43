use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::error::{AppError, AppResult};

/// IP-keyed governor layer applied to the whole portal
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Milliseconds between replenished tokens (1000 per minute)
const REPLENISH_MS: u64 = 60;
const BURST_SIZE: u32 = 1000;

/// Per-IP rate limiting. Needs `into_make_service_with_connect_info`.
pub fn create_global_governor() -> AppResult<GlobalGovernorLayer> {
    let config = GovernorConfigBuilder::default()
        .per_millisecond(REPLENISH_MS)
        .burst_size(BURST_SIZE)
        .finish()
        .ok_or_else(|| AppError::Config("Invalid rate limit settings".to_string()))?;

    Ok(GovernorLayer::new(Arc::new(config)))
}

/// Log each request and flag failures and rate-limited calls
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::debug!(client_ip = %addr.ip(), method = %method, uri = %uri, "Incoming request");

    let response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            "Rate limited"
        );
    } else if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request failed"
        );
    } else {
        tracing::debug!(client_ip = %addr.ip(), status = %status, uri = %uri, "Request completed");
    }

    response
}
