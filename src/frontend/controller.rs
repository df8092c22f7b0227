use crate::{app::util::time, upload::models::upload_response::UploadResponse};

use super::{
    client::GalleryApi,
    models::{
        page::{
            DownloadLink, GalleryView, ImageElement, Page, IMAGE_ALT, STATUS_CHOOSE_FILE,
            STATUS_DONE, STATUS_UNEXPECTED, STATUS_UPLOADING, STATUS_UPLOAD_FAILED,
        },
        selected_file::SelectedFile,
    },
};

pub async fn load_gallery<A: GalleryApi + ?Sized>(page: &mut Page, api: &A) {
    page.gallery = GalleryView::Loading;

    match api.fetch_gallery().await {
        Ok(gallery) => {
            if gallery.images.is_empty() {
                page.gallery = GalleryView::Empty;
                return;
            }

            let images = gallery
                .images
                .iter()
                .map(|url| ImageElement {
                    src: api.resolve(url),
                    alt: IMAGE_ALT.to_string(),
                })
                .collect();

            page.gallery = GalleryView::Images(images);
        }
        Err(e) => {
            tracing::error!(%e);
            page.gallery = GalleryView::Failed;
        }
    }
}

/// Page load.
pub async fn on_page_load<A: GalleryApi + ?Sized>(page: &mut Page, api: &A) {
    load_gallery(page, api).await
}

/// Refresh button.
pub async fn refresh<A: GalleryApi + ?Sized>(page: &mut Page, api: &A) {
    load_gallery(page, api).await
}

/// Upload form submission. Without a file nothing is sent.
pub async fn submit_upload<A: GalleryApi + ?Sized>(
    page: &mut Page,
    api: &A,
    file: Option<&SelectedFile>,
) {
    let Some(file) = file else {
        page.status = STATUS_CHOOSE_FILE.to_string();
        return;
    };

    page.status = STATUS_UPLOADING.to_string();

    match api.upload(file).await {
        Ok(UploadResponse {
            generated: Some(generated),
        }) => {
            let full_url = api.resolve(&generated);

            page.preview.image_src = Some(full_url.to_string());
            page.preview.download = Some(DownloadLink {
                href: full_url,
                filename: download_filename(time::current_time_in_millis()),
            });
            page.preview.hidden = false;
            page.status = STATUS_DONE.to_string();

            load_gallery(page, api).await;
        }
        Ok(_) => {
            page.status = STATUS_UNEXPECTED.to_string();
        }
        Err(e) => {
            tracing::error!(%e);
            page.status = STATUS_UPLOAD_FAILED.to_string();
        }
    }
}

pub fn download_filename(millis: u128) -> String {
    format!("synthetic_mri_{}.jpg", millis)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;

    use crate::{
        frontend::{
            errors::ClientError,
            models::page::{Preview, GALLERY_EMPTY, GALLERY_FAILED},
        },
        gallery::models::gallery_response::GalleryResponse,
    };

    use super::*;

    const BASE: &str = "http://backend.test";

    fn decode_error() -> ClientError {
        ClientError::Decode(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
    }

    /// Replays scripted responses and counts calls.
    struct MockApi {
        gallery: Mutex<Vec<Result<GalleryResponse, ClientError>>>,
        upload: Mutex<Option<Result<UploadResponse, ClientError>>>,
        gallery_calls: AtomicUsize,
        upload_calls: AtomicUsize,
    }

    impl MockApi {
        fn new() -> MockApi {
            MockApi {
                gallery: Mutex::new(Vec::new()),
                upload: Mutex::new(None),
                gallery_calls: AtomicUsize::new(0),
                upload_calls: AtomicUsize::new(0),
            }
        }

        fn with_gallery(self, response: Result<GalleryResponse, ClientError>) -> MockApi {
            self.gallery.lock().unwrap().push(response);
            self
        }

        fn with_upload(self, response: Result<UploadResponse, ClientError>) -> MockApi {
            *self.upload.lock().unwrap() = Some(response);
            self
        }

        fn gallery_calls(&self) -> usize {
            self.gallery_calls.load(Ordering::SeqCst)
        }

        fn upload_calls(&self) -> usize {
            self.upload_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GalleryApi for MockApi {
        fn resolve(&self, path: &str) -> String {
            [BASE, path].concat()
        }

        async fn fetch_gallery(&self) -> Result<GalleryResponse, ClientError> {
            self.gallery_calls.fetch_add(1, Ordering::SeqCst);
            let mut gallery = self.gallery.lock().unwrap();
            if gallery.is_empty() {
                return Ok(GalleryResponse::default());
            }
            gallery.remove(0)
        }

        async fn upload(&self, _file: &SelectedFile) -> Result<UploadResponse, ClientError> {
            self.upload_calls.fetch_add(1, Ordering::SeqCst);
            self.upload
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(UploadResponse::default()))
        }
    }

    fn images(urls: &[&str]) -> GalleryResponse {
        GalleryResponse {
            images: urls.iter().map(|url| url.to_string()).collect(),
        }
    }

    fn scan() -> SelectedFile {
        SelectedFile::new("scan.png", mime::IMAGE_PNG, vec![1u8, 2, 3])
    }

    #[tokio::test]
    async fn renders_one_image_per_url() {
        let api = MockApi::new().with_gallery(Ok(images(&["/a.jpg", "/b.jpg", "/c.jpg"])));
        let mut page = Page::new();

        load_gallery(&mut page, &api).await;

        let rendered = page.gallery.images();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].src, "http://backend.test/a.jpg");
        assert_eq!(rendered[2].src, "http://backend.test/c.jpg");
        assert!(rendered.iter().all(|img| img.alt == IMAGE_ALT));
        assert_eq!(page.gallery.message(), None);
    }

    #[tokio::test]
    async fn empty_gallery_shows_placeholder() {
        let api = MockApi::new().with_gallery(Ok(images(&[])));
        let mut page = Page::new();

        load_gallery(&mut page, &api).await;

        assert_eq!(page.gallery, GalleryView::Empty);
        assert_eq!(page.gallery.message(), Some(GALLERY_EMPTY));
        assert!(page.gallery.images().is_empty());
    }

    #[tokio::test]
    async fn missing_or_null_images_show_placeholder() {
        for body in ["{}", r#"{"images":null}"#] {
            let api = MockApi::new().with_gallery(Ok(serde_json::from_str(body).unwrap()));
            let mut page = Page::new();

            load_gallery(&mut page, &api).await;

            assert_eq!(page.gallery, GalleryView::Empty, "{}", body);
        }
    }

    #[tokio::test]
    async fn failed_fetch_shows_failure() {
        let api = MockApi::new().with_gallery(Err(decode_error()));
        let mut page = Page::new();

        load_gallery(&mut page, &api).await;

        assert_eq!(page.gallery, GalleryView::Failed);
        assert_eq!(page.gallery.message(), Some(GALLERY_FAILED));
    }

    #[tokio::test]
    async fn reload_replaces_previous_contents() {
        let api = MockApi::new()
            .with_gallery(Ok(images(&["/a.jpg", "/b.jpg"])))
            .with_gallery(Ok(images(&["/c.jpg"])));
        let mut page = Page::new();

        on_page_load(&mut page, &api).await;
        refresh(&mut page, &api).await;

        assert_eq!(page.gallery.images().len(), 1);
        assert_eq!(page.gallery.images()[0].src, "http://backend.test/c.jpg");
        assert_eq!(api.gallery_calls(), 2);
    }

    #[tokio::test]
    async fn submit_without_file_sends_nothing() {
        let api = MockApi::new();
        let mut page = Page::new();

        submit_upload(&mut page, &api, None).await;

        assert_eq!(page.status, STATUS_CHOOSE_FILE);
        assert_eq!(api.upload_calls(), 0);
        assert_eq!(api.gallery_calls(), 0);
        assert_eq!(page.preview, Preview::default());
    }

    #[tokio::test]
    async fn successful_upload_updates_preview_and_reloads_once() {
        let api = MockApi::new()
            .with_upload(Ok(UploadResponse {
                generated: Some("/x.jpg".to_string()),
            }))
            .with_gallery(Ok(images(&["/x.jpg"])));
        let mut page = Page::new();

        submit_upload(&mut page, &api, Some(&scan())).await;

        assert_eq!(page.status, STATUS_DONE);
        assert!(!page.preview.hidden);
        assert_eq!(
            page.preview.image_src.as_deref(),
            Some("http://backend.test/x.jpg")
        );

        let download = page.preview.download.as_ref().unwrap();
        assert_eq!(download.href, "http://backend.test/x.jpg");
        assert!(download.filename.starts_with("synthetic_mri_"));
        assert!(download.filename.ends_with(".jpg"));

        assert_eq!(api.upload_calls(), 1);
        assert_eq!(api.gallery_calls(), 1);
        assert_eq!(page.gallery.images().len(), 1);
    }

    #[tokio::test]
    async fn response_without_generated_is_unexpected() {
        let api = MockApi::new().with_upload(Ok(UploadResponse { generated: None }));
        let mut page = Page::new();

        submit_upload(&mut page, &api, Some(&scan())).await;

        assert_eq!(page.status, STATUS_UNEXPECTED);
        assert_eq!(page.preview, Preview::default());
        assert_eq!(api.gallery_calls(), 0);
    }

    #[tokio::test]
    async fn failed_upload_reports_backend_unreachable() {
        let api = MockApi::new().with_upload(Err(decode_error()));
        let mut page = Page::new();
        page.preview.image_src = Some("http://backend.test/old.jpg".to_string());

        submit_upload(&mut page, &api, Some(&scan())).await;

        assert_eq!(page.status, STATUS_UPLOAD_FAILED);
        assert_eq!(
            page.preview.image_src.as_deref(),
            Some("http://backend.test/old.jpg")
        );
        assert_eq!(api.gallery_calls(), 0);
    }

    #[test]
    fn download_filename_uses_timestamp() {
        assert_eq!(download_filename(1700000000123), "synthetic_mri_1700000000123.jpg");
    }
}
