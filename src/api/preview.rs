use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::preview::LinkPreview;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /api/preview`. Always answers with a preview result; a missing URL
/// is the only case that is also a 400.
pub async fn preview(
    State(state): State<AppState>,
    body: Result<Json<PreviewRequest>, JsonRejection>,
) -> (StatusCode, Json<LinkPreview>) {
    let url = body
        .ok()
        .and_then(|Json(request)| request.url)
        .filter(|url| !url.trim().is_empty());

    match url {
        Some(url) => (StatusCode::OK, Json(state.previewer.preview(&url).await)),
        None => (StatusCode::BAD_REQUEST, Json(LinkPreview::ManualRequired)),
    }
}
