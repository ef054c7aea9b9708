use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::{dto, errors};
use crate::app::services::SharedStore;

pub fn router() -> Router {
    Router::new().route("/", get(get_budget).put(set_budget))
}

pub async fn get_budget(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let store = store.read().unwrap();
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "totalBudget": store.total_budget(),
            "amountAvailable": store.amount_available(),
        })),
    )
        .into_response()
}

pub async fn set_budget(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<dto::SetBudgetRequest>,
) -> axum::response::Response {
    let mut store = store.write().unwrap();
    match store.set_total_budget(body.total_budget) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "totalBudget": store.total_budget() })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
