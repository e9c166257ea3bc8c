use thiserror::Error;

/// Errors that can occur while exporting the canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Canvas has no surface yet")]
    NoSurface,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
