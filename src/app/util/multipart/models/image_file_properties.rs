use imagesize::ImageSize;

use super::file_properties::FileProperties;

#[derive(Debug)]
pub struct ImageFileProperties {
    pub file_properties: FileProperties,
    pub image_size: ImageSize,
}

impl ImageFileProperties {
    /// Sniffs the header of the part; `None` when it is not a known image.
    pub fn from_file_properties(file_properties: FileProperties) -> Option<ImageFileProperties> {
        let Ok(image_size) = imagesize::blob_size(&file_properties.data) else {
            return None;
        };

        Some(ImageFileProperties {
            file_properties,
            image_size,
        })
    }
}
