use serde::Serialize;

mod engine;
mod error;
mod model;
mod preprocess;

pub use engine::{AnalysisMode, Analyzer, Diagnosis};
pub use error::ClassifierError;
pub(crate) use model::LeafModel;
pub use preprocess::{image_to_tensor, open_image, ImageTensor, INPUT_SIZE};

/// Information about the current state and configuration of an analyzer
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerInfo {
    /// Whether diagnoses are model-backed or simulated
    pub mode: AnalysisMode,
    /// Path the model artifact was loaded (or expected) from
    pub model_path: String,
    /// Number of labels the classifier can report
    pub num_labels: usize,
    /// Display names of the labels
    pub labels: Vec<String>,
}
