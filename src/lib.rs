//! A plant leaf disease classifier with graceful demo-mode fallback.
//!
//! The crate loads an ONNX image-classification model once at startup and
//! diagnoses leaf photos against a fixed set of six conditions. When the
//! model artifact is missing or unloadable, analysis degrades to uniformly
//! drawn labels that are explicitly marked as simulated, so the rest of the
//! pipeline (treatment lookup, display) keeps working without the artifact.
//! A small rule-based assistant answers plant-care questions and keeps a
//! transcript of the exchange.
//!
//! # Basic Usage
//!
//! ```rust
//! use foliar::{treatment_for, Analyzer, ClassifierHandle, RuntimeConfig};
//!
//! // Without the artifact present this drops into demo mode instead of failing.
//! let handle = ClassifierHandle::initialize(
//!     "models/plant_disease_model.onnx",
//!     &RuntimeConfig::default(),
//! );
//! println!("{}", handle.status_message());
//!
//! let analyzer = Analyzer::new(handle);
//! let photo = image::DynamicImage::new_rgb8(640, 480);
//! let diagnosis = analyzer.analyze(&photo);
//!
//! let treatment = treatment_for(diagnosis.label);
//! println!("Prediction: {}", diagnosis.label);
//! println!("Status: {}", treatment.status);
//! ```
//!
//! # Care Assistant
//!
//! ```rust
//! use foliar::{respond, ConversationLog};
//!
//! let mut log = ConversationLog::new();
//! let reply = respond(&mut log, "When should I water my plants?");
//! assert_eq!(
//!     reply,
//!     Some("Water your plants early in the morning. Avoid overwatering!")
//! );
//! assert_eq!(log.len(), 2);
//! ```

pub mod assistant;
pub mod classifier;
pub mod labels;
pub mod loader;
mod runtime;
pub mod treatments;

pub use assistant::{reply_for, respond, ConversationLog, Speaker, FALLBACK_REPLY};
pub use classifier::{
    image_to_tensor, open_image, AnalysisMode, Analyzer, AnalyzerInfo, ClassifierError, Diagnosis,
    ImageTensor, INPUT_SIZE,
};
pub use labels::Label;
pub use loader::{default_model_path, ClassifierHandle, LoadError, LoadState, DEFAULT_MODEL_PATH};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use treatments::{treatment_for, TreatmentEntry};

pub fn init_logger() {
    env_logger::init();
}
