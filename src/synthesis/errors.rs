use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("failed to process image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
