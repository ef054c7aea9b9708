use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use budgetd_core::DomainError;

use crate::app::{dto, errors};
use crate::app::services::SharedStore;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_envelopes).post(create_envelope))
        .route(
            "/:name",
            get(get_envelope)
                .put(update_envelope)
                .delete(delete_envelope),
        )
        .route("/:from/:to", put(transfer_amount))
}

pub async fn list_envelopes(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let store = store.read().unwrap();
    let envelopes = store
        .envelopes()
        .iter()
        .map(dto::envelope_to_json)
        .collect::<Vec<_>>();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "envelopes": envelopes })),
    )
        .into_response()
}

pub async fn create_envelope(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<dto::EnvelopeBody>,
) -> axum::response::Response {
    let mut store = store.write().unwrap();
    let name = body.envelope.name.clone();

    if let Err(e) = store.add_envelope(body.envelope.into()) {
        return errors::domain_error_to_response(e);
    }

    // Read the record back so the response reflects exactly what was stored.
    match store.envelope(&name) {
        Some(envelope) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "envelope": dto::envelope_to_json(envelope) })),
        )
            .into_response(),
        None => errors::envelope_not_found(&name),
    }
}

pub async fn get_envelope(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let store = store.read().unwrap();
    match store.envelope(&name) {
        Some(envelope) => (
            StatusCode::OK,
            Json(serde_json::json!({ "envelope": dto::envelope_to_json(envelope) })),
        )
            .into_response(),
        None => errors::envelope_not_found(&name),
    }
}

pub async fn update_envelope(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
    Json(body): Json<dto::EnvelopeBody>,
) -> axum::response::Response {
    let mut store = store.write().unwrap();
    match store.update_envelope(&name, body.envelope.into()) {
        Ok(envelope) => (
            StatusCode::OK,
            Json(serde_json::json!({ "envelope": dto::envelope_to_json(&envelope) })),
        )
            .into_response(),
        Err(DomainError::NotFound) => errors::envelope_not_found(&name),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_envelope(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let mut store = store.write().unwrap();

    // Resolve the name first; the store itself deletes unconditionally.
    if store.envelope(&name).is_none() {
        return errors::envelope_not_found(&name);
    }

    store.delete_envelope(&name);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn transfer_amount(
    Extension(store): Extension<SharedStore>,
    Path((from, to)): Path<(String, String)>,
    Json(body): Json<dto::TransferRequest>,
) -> axum::response::Response {
    let mut store = store.write().unwrap();

    // Resolve both names before the transfer so the 404 names the
    // missing envelope rather than a generic not-found.
    if store.envelope(&from).is_none() {
        return errors::envelope_not_found(&from);
    }
    if store.envelope(&to).is_none() {
        return errors::envelope_not_found(&to);
    }

    match store.transfer(&from, &to, body.amount) {
        Ok((from_envelope, to_envelope)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "from": dto::envelope_to_json(&from_envelope),
                "to": dto::envelope_to_json(&to_envelope),
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
