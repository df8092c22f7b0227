use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    response::IntoResponse,
};
use mime::Mime;
use uuid::Uuid;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::models::file_properties::FileProperties;

pub async fn get_files_properties(mut multipart: Multipart) -> Result<Vec<FileProperties>, ApiError> {
    let mut vec = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_error(e)),
        };

        let field_name = field.name().unwrap_or("file").to_string();
        let file_name = field.file_name().unwrap_or("file-name").to_string();
        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => return Err(multipart_error(e)),
        };

        let properties = FileProperties {
            id: Uuid::new_v4().simple().to_string(),
            field_name,
            file_name,
            mime_type,
            data,
        };

        vec.push(properties);
    }

    Ok(vec)
}

/// Body limit overruns surface while streaming a field; they keep their 413.
fn multipart_error(e: MultipartError) -> ApiError {
    tracing::error!(%e);

    match e.into_response().status() {
        StatusCode::PAYLOAD_TOO_LARGE => DefaultApiError::PayloadTooLarge.value(),
        _ => DefaultApiError::MalformedMultipart.value(),
    }
}
