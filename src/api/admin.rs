//! Staff endpoints: login, the RFQ dashboard listing, quote entry.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::auth::verify_credentials;
use crate::domain::{RfqPatch, RfqWithProducts};
use super::{ApiError, AppState};

/// Missing fields are treated as blank so they fail like any other bad
/// credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Checks credentials against the stored argon2 hash. Nothing is recorded
/// on either outcome.
#[instrument(skip_all, fields(username = tracing::field::Empty))]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body?;
    tracing::Span::current().record("username", request.username.as_str());

    let admin = state.store.admin_by_username(&request.username).await?;
    let stored_hash = admin.as_ref().map(|a| a.password_hash.as_str());
    if verify_credentials(&request.password, stored_hash) {
        info!("Admin logged in");
        Ok(Json(json!({ "success": true })))
    } else {
        warn!(known_user = admin.is_some(), "Admin login rejected");
        Err(ApiError::Unauthorized)
    }
}

#[instrument(skip(state))]
pub async fn list_rfqs(State(state): State<AppState>) -> Result<Json<Vec<RfqWithProducts>>, ApiError> {
    Ok(Json(state.store.list_rfqs_with_products().await?))
}

#[instrument(skip(state, body))]
pub async fn update_rfq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RfqPatch>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(patch) = body?;
    patch.validate()?;

    let rfq = state.store.update_rfq(&id, patch).await?;
    Ok(Json(json!({ "success": true, "rfq": rfq })))
}
