//! Activity logging for every request and response.

use std::net::SocketAddr;

use axum::{
    body::{Body, to_bytes},
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs the inbound request and the outbound response around the whole
/// router, whatever the outcome of the call.
///
/// The response body is buffered so it can appear in the log entry; every
/// body this service produces is a small JSON document or a short banner.
pub async fn log_activity(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    tracing::info!(
        "Incoming request: {} {} from {}",
        method,
        uri,
        ip.as_deref().unwrap_or("unknown")
    );

    let response = next.run(request).await;
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            tracing::info!(
                "Outgoing response: status={}, body={}",
                parts.status.as_u16(),
                String::from_utf8_lossy(&bytes)
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::error!("Failed to buffer response body for logging: {}", e);
            Response::from_parts(parts, Body::empty())
        }
    }
}
