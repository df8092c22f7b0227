use axum::extract::Multipart;
use uuid::Uuid;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        storage::Storage,
        util::multipart::{
            models::{
                file_properties::FileProperties, image_file_properties::ImageFileProperties,
            },
            multipart::get_files_properties,
        },
    },
    synthesis, AppState,
};

use super::{errors::UploadApiError, models::upload_response::UploadResponse, UPLOAD_FIELD};

pub async fn upload_and_generate(
    multipart: Multipart,
    state: &AppState,
) -> Result<UploadResponse, ApiError> {
    let files_properties = get_files_properties(multipart).await?;

    let Some(file_properties) = files_properties
        .into_iter()
        .find(|properties| properties.field_name == UPLOAD_FIELD && !properties.data.is_empty())
    else {
        return Err(UploadApiError::NothingToUpload.value());
    };

    let Some(image) = ImageFileProperties::from_file_properties(file_properties) else {
        return Err(UploadApiError::NotAnImage.value());
    };

    tracing::info!(
        file_name = %image.file_properties.file_name,
        mime_type = %image.file_properties.mime_type,
        width = image.image_size.width,
        height = image.image_size.height,
        "received upload"
    );

    generate_from_upload(&image.file_properties, &state.storage).await
}

/// Persists the upload, then writes the synthetic scan next to the others in
/// the gallery.
pub async fn generate_from_upload(
    file_properties: &FileProperties,
    storage: &Storage,
) -> Result<UploadResponse, ApiError> {
    let upload_name = [
        file_properties.id.as_str(),
        "_",
        &file_properties.safe_file_name(),
    ]
    .concat();
    let upload_path = storage.uploads_dir.join(upload_name);

    if let Err(e) = tokio::fs::write(&upload_path, &file_properties.data).await {
        tracing::error!(%e);
        return Err(DefaultApiError::InternalServerError.value());
    }

    let out_name = [Uuid::new_v4().simple().to_string().as_str(), ".jpg"].concat();
    let out_path = storage.generated_dir.join(&out_name);

    let result = tokio::task::spawn_blocking(move || {
        synthesis::service::generate_to_file(&upload_path, &out_path)
    })
    .await;

    match result {
        Ok(Ok(())) => Ok(UploadResponse {
            generated: Some(storage.generated_url(&out_name)),
        }),
        Ok(Err(e)) => {
            tracing::error!(%e);
            Err(UploadApiError::GenerationFailed.value())
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
