pub const GALLERY_LOADING: &str = "Loading gallery…";
pub const GALLERY_EMPTY: &str = "No images yet. Upload to generate!";
pub const GALLERY_FAILED: &str = "Failed to load gallery.";
pub const IMAGE_ALT: &str = "Synthetic MRI";

pub const STATUS_CHOOSE_FILE: &str = "Please choose an image file first.";
pub const STATUS_UPLOADING: &str = "Uploading and generating…";
pub const STATUS_DONE: &str = "Done!";
pub const STATUS_UNEXPECTED: &str = "Unexpected response from server.";
pub const STATUS_UPLOAD_FAILED: &str = "Upload failed. Check backend is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
}

/// Contents of the gallery container. Each load replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryView {
    #[default]
    Blank,
    Loading,
    Empty,
    Failed,
    Images(Vec<ImageElement>),
}

impl GalleryView {
    /// Status line shown inside the container, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(GALLERY_LOADING),
            Self::Empty => Some(GALLERY_EMPTY),
            Self::Failed => Some(GALLERY_FAILED),
            Self::Blank | Self::Images(_) => None,
        }
    }

    pub fn images(&self) -> &[ImageElement] {
        match self {
            Self::Images(images) => images,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub hidden: bool,
    pub image_src: Option<String>,
    pub download: Option<DownloadLink>,
}

impl Default for Preview {
    fn default() -> Self {
        Preview {
            hidden: true,
            image_src: None,
            download: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub gallery: GalleryView,
    pub status: String,
    pub preview: Preview,
}

impl Page {
    pub fn new() -> Page {
        Page::default()
    }
}
