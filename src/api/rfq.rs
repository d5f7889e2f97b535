//! Customer endpoints: submit an RFQ, view it, respond to the quote.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::{ProductInput, RfqCreate, RfqWithProducts};
use super::{ApiError, AppState};

/// Body of `POST /api/rfq`: customer details plus the product lines.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRfqRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub rfq: RfqCreate,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub products: Vec<ProductInput>,
}

/// `"products": null` submits an RFQ without products.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ProductInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProductInput>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRfq {
    pub rfq_id: String,
    pub rfq_number: String,
}

#[instrument(skip_all)]
pub async fn create_rfq(
    State(state): State<AppState>,
    body: Result<Json<CreateRfqRequest>, JsonRejection>,
) -> Result<Json<CreatedRfq>, ApiError> {
    let Json(request) = body?;
    request.validate()?;

    let submitted = state.store.submit_rfq(request.rfq, request.products).await?;
    info!(
        rfq_number = %submitted.rfq.rfq_number,
        products = submitted.products.len(),
        "RFQ submitted"
    );
    Ok(Json(CreatedRfq {
        rfq_id: submitted.rfq.id,
        rfq_number: submitted.rfq.rfq_number,
    }))
}

#[instrument(skip(state))]
pub async fn get_rfq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RfqWithProducts>, ApiError> {
    state
        .store
        .rfq_with_products(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("RFQ not found".to_string()))
}

#[instrument(skip(state))]
pub async fn accept_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.accept_quote(&id).await?;
    Ok(Json(json!({ "success": true })))
}

#[instrument(skip(state))]
pub async fn reject_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.reject_quote(&id).await?;
    Ok(Json(json!({ "success": true })))
}
