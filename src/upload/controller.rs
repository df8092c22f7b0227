use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::upload_response::UploadResponse, service};

pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    match service::upload_and_generate(multipart, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}

/// Older clients post to `/upload_dataset/`.
pub async fn legacy_upload(
    state: State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    upload(state, multipart).await
}
