use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
};

use crate::app::{env::Envy, storage::Storage};

pub mod app;
pub mod frontend;
pub mod gallery;
pub mod synthesis;
pub mod upload;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub envy: Arc<Envy>,
}

/// Builds the HTTP surface: the JSON api, the legacy upload alias and the
/// static file mount the returned image urls point into.
pub fn app(state: AppState) -> Router {
    let max_upload_bytes = state
        .envy
        .max_upload_bytes
        .to_owned()
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // gallery
        .route("/api/gallery", get(gallery::controller::get_gallery))
        // upload
        .route("/api/upload", post(upload::controller::upload))
        .route("/upload_dataset/", post(upload::controller::legacy_upload))
        // static
        .nest_service(
            app::storage::STATIC_ROUTE,
            ServeDir::new(&state.storage.static_dir),
        )
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(max_upload_bytes))
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}
