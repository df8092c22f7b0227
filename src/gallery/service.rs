use std::{io::ErrorKind, time::SystemTime};

use crate::app::{errors::DefaultApiError, models::api_error::ApiError, storage::Storage};

use super::models::gallery_response::GalleryResponse;

pub const GALLERY_EXTENSION: &str = "jpg";

pub async fn get_gallery(storage: &Storage) -> Result<GalleryResponse, ApiError> {
    let mut entries = match tokio::fs::read_dir(&storage.generated_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(GalleryResponse::default()),
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let mut files: Vec<(SystemTime, String)> = Vec::new();

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(%e);
                return Err(DefaultApiError::InternalServerError.value());
            }
        };

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(GALLERY_EXTENSION) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        // files can vanish between listing and stat
        let Ok(metadata) = entry.metadata().await else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((modified, file_name.to_string()));
    }

    files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    Ok(GalleryResponse {
        images: files
            .iter()
            .map(|(_, file_name)| storage.generated_url(file_name))
            .collect(),
    })
}
