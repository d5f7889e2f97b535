//! HTTP surface: JSON endpoints under `/api`.

mod admin;
mod error;
mod preview;
mod rfq;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::preview::LinkPreviewer;
use crate::store::RecordStore;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub previewer: LinkPreviewer,
}

/// Build the complete router.
///
/// Every route answers other methods with a JSON 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health).fallback(method_not_allowed))
        .route("/api/preview", post(preview::preview).fallback(method_not_allowed))
        .route("/api/rfq", post(rfq::create_rfq).fallback(method_not_allowed))
        .route("/api/rfq/:id", get(rfq::get_rfq).fallback(method_not_allowed))
        .route("/api/rfq/:id/accept", post(rfq::accept_quote).fallback(method_not_allowed))
        .route("/api/rfq/:id/reject", post(rfq::reject_quote).fallback(method_not_allowed))
        .route("/api/admin/login", post(admin::login).fallback(method_not_allowed))
        .route("/api/admin/rfqs", get(admin::list_rfqs).fallback(method_not_allowed))
        .route("/api/admin/rfq/:id", patch(admin::update_rfq).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
