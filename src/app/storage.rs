use std::{
    io,
    path::{Path, PathBuf},
};

pub const STATIC_ROUTE: &str = "/static";
pub const GENERATED_URL_PREFIX: &str = "/static/generated";

/// On-disk layout under the static directory. Everything in here is
/// reachable from `/static/...`.
#[derive(Debug, Clone)]
pub struct Storage {
    pub static_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub generated_dir: PathBuf,
}

impl Storage {
    pub fn new(static_dir: impl AsRef<Path>) -> Storage {
        let static_dir = static_dir.as_ref().to_path_buf();

        Storage {
            uploads_dir: static_dir.join("uploads"),
            generated_dir: static_dir.join("generated"),
            static_dir,
        }
    }

    pub fn ensure_dirs(&self) -> io::Result<()> {
        for dir in [&self.static_dir, &self.uploads_dir, &self.generated_dir] {
            std::fs::create_dir_all(dir)?;
        }

        Ok(())
    }

    pub fn generated_url(&self, file_name: &str) -> String {
        [GENERATED_URL_PREFIX, "/", file_name].concat()
    }
}
