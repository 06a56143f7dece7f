//! # Shopdesk API
//!
//! JSON-over-HTTP backend for the Shopdesk admin SPA.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Server                                       │
//! │                                                                         │
//! │  Admin SPA ───► HTTP (3000) ───► TraceLayer ► CorsLayer ► TimeoutLayer │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                       routes ──► CatalogService / OrderService         │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                                SQLite (shopdesk-db)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary in `main.rs` loads [`config::ApiConfig`], opens the database and
//! serves [`app`]. Integration tests build the same router over an in-memory
//! database.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::time::Duration;

use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::config::{ApiConfig, ConfigError};
use crate::state::AppState;

/// Builds the full application: routes, state and middleware.
pub fn app(state: AppState, config: &ApiConfig) -> Result<Router, ConfigError> {
    Ok(routes::routes()
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(config.cors_allow_origin.as_deref())?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record("latency_ms", latency.as_millis() as u64);
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin)
        .map_err(|_| ConfigError::InvalidValue("CORS_ALLOW_ORIGIN".to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origin_must_be_a_header_value() {
        assert!(cors_layer(None).is_ok());
        assert!(cors_layer(Some("http://localhost:5173")).is_ok());

        let err = cors_layer(Some("http://bad\norigin")).err().unwrap();
        assert_eq!(err.to_string(), "Invalid value for CORS_ALLOW_ORIGIN");
    }
}
