use std::path::Path;

use bytes::Bytes;
use mime::Mime;

#[derive(Debug)]
pub struct FileProperties {
    pub id: String,
    pub field_name: String,
    pub file_name: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

impl FileProperties {
    /// Client supplied names may carry directories; only the last component
    /// is ever used on disk.
    pub fn safe_file_name(&self) -> String {
        Path::new(&self.file_name.replace('\\', "/"))
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("upload")
            .to_string()
    }
}
