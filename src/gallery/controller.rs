use axum::{extract::State, Json};

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::gallery_response::GalleryResponse, service};

pub async fn get_gallery(State(state): State<AppState>) -> Result<Json<GalleryResponse>, ApiError> {
    match service::get_gallery(&state.storage).await {
        Ok(gallery) => Ok(Json(gallery)),
        Err(e) => Err(e),
    }
}
