use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub static_dir: Option<String>,
    pub max_upload_bytes: Option<usize>,
}
