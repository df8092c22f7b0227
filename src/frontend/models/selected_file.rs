use std::path::Path;

use bytes::Bytes;
use mime::Mime;

use crate::frontend::errors::ClientError;

/// What the file input holds once the user picked a scan.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(file_name: &str, mime_type: Mime, data: impl Into<Bytes>) -> SelectedFile {
        SelectedFile {
            file_name: file_name.to_string(),
            mime_type,
            data: data.into(),
        }
    }

    pub async fn from_path(path: &Path) -> Result<SelectedFile, ClientError> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file-name");

        Ok(SelectedFile::new(file_name, mime_from_path(path), data))
    }
}

fn mime_from_path(path: &Path) -> Mime {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("bmp") => mime::IMAGE_BMP,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_image_mime_from_extension() {
        assert_eq!(mime_from_path(Path::new("a/scan.JPG")), mime::IMAGE_JPEG);
        assert_eq!(mime_from_path(Path::new("scan.png")), mime::IMAGE_PNG);
        assert_eq!(
            mime_from_path(Path::new("scan.dcm")),
            mime::APPLICATION_OCTET_STREAM
        );
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brain.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();

        assert_eq!(file.file_name, "brain.png");
        assert_eq!(file.mime_type, mime::IMAGE_PNG);
        assert_eq!(&file.data[..], b"\x89PNG");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = SelectedFile::from_path(&dir.path().join("nope.png")).await;

        assert!(matches!(result, Err(ClientError::File(_))));
    }
}
