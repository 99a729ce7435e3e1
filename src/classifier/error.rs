use ort::Error as OrtError;
use std::fmt;

/// Represents the different types of errors that can occur in the leaf classifier.
#[derive(Debug)]
pub enum ClassifierError {
    /// Error occurred while decoding or reading an image
    ImageError(String),
    /// Error occurred while loading or running the ONNX model
    ModelError(String),
    /// Error occurred while interpreting model output
    PredictionError(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageError(msg) => write!(f, "Image error: {}", msg),
            Self::ModelError(msg) => write!(f, "Model error: {}", msg),
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::ModelError(err.to_string())
    }
}

impl From<image::ImageError> for ClassifierError {
    fn from(err: image::ImageError) -> Self {
        ClassifierError::ImageError(err.to_string())
    }
}
