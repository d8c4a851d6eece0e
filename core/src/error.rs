use thiserror::Error;

/// Result type for segeval operations
pub type Result<T> = std::result::Result<T, SegevalError>;

/// Error types for segeval operations
#[derive(Error, Debug)]
pub enum SegevalError {
    /// NIfTI reading error
    #[error("NIfTI error: {0}")]
    Nifti(String),

    /// Image or GIF encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Two volumes that must share a shape do not
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Class count must be positive
    #[error("Invalid class count: {0}")]
    InvalidClassCount(usize),

    /// Volume with an unsupported layout
    #[error("Invalid volume: {0}")]
    InvalidVolume(String),

    /// Sample identifier unknown to the source
    #[error("Sample not found: {0}")]
    SampleNotFound(String),

    /// Sample pattern failed to compile
    #[error("Invalid sample pattern: {0}")]
    InvalidPattern(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<nifti::NiftiError> for SegevalError {
    fn from(e: nifti::NiftiError) -> Self {
        SegevalError::Nifti(format!("{}", e))
    }
}

impl From<image::ImageError> for SegevalError {
    fn from(e: image::ImageError) -> Self {
        SegevalError::Image(format!("{}", e))
    }
}

impl From<ndarray::ShapeError> for SegevalError {
    fn from(e: ndarray::ShapeError) -> Self {
        SegevalError::InvalidVolume(format!("{}", e))
    }
}

impl From<regex::Error> for SegevalError {
    fn from(e: regex::Error) -> Self {
        SegevalError::InvalidPattern(format!("{}", e))
    }
}
