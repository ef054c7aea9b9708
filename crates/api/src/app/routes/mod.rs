use axum::Router;

pub mod budget;
pub mod envelopes;
pub mod system;

/// Router for all budgeting endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/budget", budget::router())
        .nest("/envelopes", envelopes::router())
}
