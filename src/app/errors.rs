use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    MalformedMultipart,
    PayloadTooLarge,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::MalformedMultipart => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Malformed multipart body.".to_string(),
            },
            Self::PayloadTooLarge => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Upload is too large.".to_string(),
            },
        }
    }
}
