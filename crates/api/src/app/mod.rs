//! HTTP application wiring (Axum router + shared store).
//!
//! Layout:
//! - `services.rs`: shared-state wiring (the locked ledger store)
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh, empty ledger store (public
/// entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with_store(services::build_store())
}

/// Build the router over an existing store. Tests use this to seed or
/// inspect state from outside the HTTP surface.
pub fn build_app_with_store(store: services::SharedStore) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(store))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
