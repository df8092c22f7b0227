pub mod file_properties;
pub mod image_file_properties;
