use std::env;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;

use crate::classifier::LeafModel;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// Default artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/plant_disease_model.onnx";

/// Environment variable that overrides the default artifact location.
pub const MODEL_PATH_ENV: &str = "FOLIAR_MODEL";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Model artifact not found at {}", .0.display())]
    ArtifactMissing(PathBuf),
    #[error("Session error: {0}")]
    Session(#[from] ort::Error),
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

/// The condition the one-shot load attempt ended in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// The artifact was deserialized and validated.
    Loaded,
    /// No file at the artifact path; the process runs in demo mode.
    Missing,
    /// The file exists but could not be loaded as a model.
    Failed(String),
}

/// Holds the outcome of loading the classification model.
///
/// The handle is constructed exactly once per process and never reloads:
/// a missing or unloadable artifact is a supported steady state (demo mode),
/// not an error, so `initialize` is infallible. Hosts surface the outcome
/// through [`state`](Self::state) or [`status_message`](Self::status_message).
#[derive(Debug)]
pub struct ClassifierHandle {
    model: Option<LeafModel>,
    state: LoadState,
    path: PathBuf,
}

impl ClassifierHandle {
    /// Probes the artifact path once and builds the model session if it can.
    ///
    /// Every failure is absorbed into the returned handle's state: a missing
    /// file becomes [`LoadState::Missing`], anything that breaks during
    /// session construction or validation becomes [`LoadState::Failed`].
    pub fn initialize<P: AsRef<Path>>(path: P, config: &RuntimeConfig) -> Self {
        let path = path.as_ref().to_path_buf();
        match Self::try_load(&path, config) {
            Ok(model) => {
                info!("AI model loaded successfully from {:?}", path);
                Self {
                    model: Some(model),
                    state: LoadState::Loaded,
                    path,
                }
            }
            Err(LoadError::ArtifactMissing(_)) => {
                warn!(
                    "Model file not found at {:?}. Running in demo mode with simulated results.",
                    path
                );
                Self {
                    model: None,
                    state: LoadState::Missing,
                    path,
                }
            }
            Err(e) => {
                error!("Could not load model from {:?}: {}", path, e);
                Self {
                    model: None,
                    state: LoadState::Failed(e.to_string()),
                    path,
                }
            }
        }
    }

    fn try_load(path: &Path, config: &RuntimeConfig) -> Result<LeafModel, LoadError> {
        if !path.exists() {
            return Err(LoadError::ArtifactMissing(path.to_path_buf()));
        }
        let session = create_session_builder(config)?.commit_from_file(path)?;
        LeafModel::new(session).map_err(|e| LoadError::InvalidModel(e.to_string()))
    }

    /// True when a usable model is held.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Returns the load outcome.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns the artifact path this handle was initialized with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn model(&self) -> Option<&LeafModel> {
        self.model.as_ref()
    }

    /// Returns the user-facing banner for the load outcome.
    pub fn status_message(&self) -> String {
        match &self.state {
            LoadState::Loaded => "AI Model loaded successfully!".to_string(),
            LoadState::Missing => {
                "Model file not found. Running in demo mode with simulated results.".to_string()
            }
            LoadState::Failed(reason) => format!("Could not load model: {}", reason),
        }
    }
}

/// Resolves the artifact path from the environment, falling back to
/// [`DEFAULT_MODEL_PATH`].
pub fn default_model_path() -> PathBuf {
    if let Ok(path) = env::var(MODEL_PATH_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_MODEL_PATH)
}
