use std::{env, net::SocketAddr, sync::Arc};

use mri_gallery::{
    app::{env::Envy, storage::Storage},
    AppState, DEFAULT_PORT, DEFAULT_STATIC_DIR,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(DEFAULT_PORT);
    let static_dir = envy
        .static_dir
        .to_owned()
        .unwrap_or(DEFAULT_STATIC_DIR.to_string());

    let storage = Storage::new(&static_dir);
    storage
        .ensure_dirs()
        .expect("failed to create storage directories");

    tracing::info!(static_dir = %storage.static_dir.display(), "storage ready");

    let state = AppState {
        storage,
        envy: Arc::new(envy),
    };

    let app = mri_gallery::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
