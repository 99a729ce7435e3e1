use image::DynamicImage;
use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use super::preprocess::{image_to_tensor, ImageTensor};
use crate::labels::Label;
use crate::loader::ClassifierHandle;

/// How a diagnosis was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// The loaded model scored the image.
    Model,
    /// No usable model; the label was drawn uniformly at random.
    Simulated,
}

/// The outcome of analyzing a single leaf photo.
///
/// `confidence` is only present for model-backed results; simulated draws
/// carry `None` so a host can never mistake one for a real score.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub label: Label,
    pub confidence: Option<f32>,
    pub mode: AnalysisMode,
}

impl Diagnosis {
    /// True when the label was drawn rather than predicted. Hosts must
    /// disclose this to the user.
    pub fn is_simulated(&self) -> bool {
        self.mode == AnalysisMode::Simulated
    }
}

/// Analyzes leaf photos, dispatching to the loaded model when one is
/// available and to a simulated draw otherwise.
///
/// The analyzer owns its [`ClassifierHandle`] and every call borrows it, so
/// whether analysis is model-backed is decided once at construction.
/// `analyze` and `dispatch` are total: they always produce a [`Diagnosis`]
/// with a label from the known set.
///
/// ```rust
/// use foliar::{Analyzer, ClassifierHandle, RuntimeConfig};
///
/// let handle = ClassifierHandle::initialize(
///     "models/plant_disease_model.onnx",
///     &RuntimeConfig::default(),
/// );
/// let analyzer = Analyzer::new(handle);
///
/// let photo = image::DynamicImage::new_rgb8(320, 240);
/// let diagnosis = analyzer.analyze(&photo);
/// assert!(diagnosis.confidence.is_some() || diagnosis.is_simulated());
/// ```
///
/// The analyzer is `Send + Sync` and can be shared across threads:
///
/// ```rust
/// use foliar::{Analyzer, ClassifierHandle, RuntimeConfig};
/// use std::sync::Arc;
/// use std::thread;
///
/// let handle = ClassifierHandle::initialize(
///     "models/plant_disease_model.onnx",
///     &RuntimeConfig::default(),
/// );
/// let analyzer = Arc::new(Analyzer::new(handle));
///
/// let worker = Arc::clone(&analyzer);
/// thread::spawn(move || {
///     worker.analyze(&image::DynamicImage::new_rgb8(64, 64));
/// })
/// .join()
/// .unwrap();
/// ```
#[derive(Debug)]
pub struct Analyzer {
    handle: ClassifierHandle,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Analyzer>();
    }
};

impl Analyzer {
    /// Creates an analyzer over an already-initialized handle.
    pub fn new(handle: ClassifierHandle) -> Self {
        Self { handle }
    }

    /// Returns the handle this analyzer dispatches through.
    pub fn handle(&self) -> &ClassifierHandle {
        &self.handle
    }

    /// Preprocesses a decoded photo and diagnoses it.
    pub fn analyze(&self, image: &DynamicImage) -> Diagnosis {
        let tensor = image_to_tensor(image);
        self.dispatch(&tensor)
    }

    /// Diagnoses an already-preprocessed image batch.
    ///
    /// With a loaded model the label is the argmax of the model's scores;
    /// without one, or if the forward pass fails at call time, the label is
    /// drawn uniformly at random and the result is marked simulated.
    pub fn dispatch(&self, tensor: &ImageTensor) -> Diagnosis {
        match self.handle.model() {
            Some(model) => match model.predict(tensor) {
                Ok(scores) => {
                    let label = best_label(&scores);
                    debug!("Model diagnosis: {} ({:.3})", label, scores[label.index()]);
                    Diagnosis {
                        label,
                        confidence: Some(scores[label.index()]),
                        mode: AnalysisMode::Model,
                    }
                }
                Err(e) => {
                    warn!("Inference failed, serving simulated diagnosis instead: {}", e);
                    self.simulated()
                }
            },
            None => self.simulated(),
        }
    }

    /// Returns information about the analyzer's current state.
    pub fn info(&self) -> super::AnalyzerInfo {
        super::AnalyzerInfo {
            mode: if self.handle.is_loaded() {
                AnalysisMode::Model
            } else {
                AnalysisMode::Simulated
            },
            model_path: self.handle.path().display().to_string(),
            num_labels: Label::COUNT,
            labels: Label::ALL.iter().map(|label| label.to_string()).collect(),
        }
    }

    fn simulated(&self) -> Diagnosis {
        let index = rand::thread_rng().gen_range(0..Label::COUNT);
        let label = Label::ALL[index];
        debug!("Simulated diagnosis: {}", label);
        Diagnosis {
            label,
            confidence: None,
            mode: AnalysisMode::Simulated,
        }
    }
}

/// Returns the label with the highest score. Ties resolve to the lowest
/// label index, so the comparison must stay strictly greater-than.
fn best_label(scores: &[f32; Label::COUNT]) -> Label {
    let mut best = Label::ALL[0];
    let mut best_score = scores[0];
    for (label, &score) in Label::ALL.iter().zip(scores.iter()).skip(1) {
        if score > best_score {
            best = *label;
            best_score = score;
        }
    }
    best
}
