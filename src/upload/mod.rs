pub mod controller;
pub mod errors;
pub mod models;
pub mod service;

/// Multipart field the upload form submits the scan under.
pub const UPLOAD_FIELD: &str = "mri_image";
