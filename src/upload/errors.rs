use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum UploadApiError {
    NothingToUpload,
    NotAnImage,
    GenerationFailed,
}

impl UploadApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NothingToUpload => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Received nothing to upload.".to_string(),
            },
            Self::NotAnImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "File must be an image.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate synthetic image.".to_string(),
            },
        }
    }
}
