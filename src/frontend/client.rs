use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::{
    gallery::models::gallery_response::GalleryResponse,
    upload::{models::upload_response::UploadResponse, UPLOAD_FIELD},
};

use super::{errors::ClientError, models::selected_file::SelectedFile};

pub const API_BASE: &str = "http://127.0.0.1:8000";

/// The two backend calls the page makes, plus how returned paths become
/// absolute urls.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    fn resolve(&self, path: &str) -> String;

    async fn fetch_gallery(&self) -> Result<GalleryResponse, ClientError>;

    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    pub base: String,
    pub http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &str, http_client: Option<reqwest::Client>) -> ApiClient {
        ApiClient {
            base: base.trim_end_matches('/').to_string(),
            http_client: http_client.unwrap_or_default(),
        }
    }

    fn url(&self, path: &str) -> String {
        [self.base.as_str(), path].concat()
    }

    // The body is decoded whatever the status: error responses are still JSON
    // and only lack the expected field.
    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
        let text = res.text().await?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::debug!(%text, "undecodable response body");
                Err(ClientError::Decode(e))
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(API_BASE, None)
    }
}

#[async_trait]
impl GalleryApi for ApiClient {
    fn resolve(&self, path: &str) -> String {
        self.url(path)
    }

    async fn fetch_gallery(&self) -> Result<GalleryResponse, ClientError> {
        let res = self
            .http_client
            .get(self.url("/api/gallery"))
            .send()
            .await?;

        ApiClient::decode(res).await
    }

    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(file.data.to_vec())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type.as_ref())?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let res = self
            .http_client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;

        ApiClient::decode(res).await
    }
}
