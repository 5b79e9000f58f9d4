//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/companies/*`, `/products/*` - REST resources
//! - `GET /health`                 - Health check
//! - `GET /api/schema`             - OpenAPI document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::openapi::schema_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/companies/` and
/// `/companies` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::resource_routes())
        .route("/health", get(health_handler))
        .route("/api/schema", get(schema_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
