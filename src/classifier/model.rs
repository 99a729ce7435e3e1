use ort::session::Session;
use ort::value::Tensor;
use std::collections::HashMap;

use super::error::ClassifierError;
use super::preprocess::ImageTensor;
use crate::labels::Label;

/// A loaded ONNX leaf-classification model.
///
/// The artifact is treated as opaque: the only contract is that it accepts a
/// `(1, 224, 224, 3)` float batch on its single image input and produces one
/// score per known label.
#[derive(Debug)]
pub struct LeafModel {
    session: Session,
    input_name: String,
}

impl LeafModel {
    /// Wraps a committed session, resolving the input tensor name and
    /// checking that the model exposes the expected input/output structure.
    pub(crate) fn new(session: Session) -> Result<Self, ClassifierError> {
        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| ClassifierError::ModelError("Model has no input tensors".to_string()))?;
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model has no output tensors".to_string(),
            ));
        }
        Ok(Self { session, input_name })
    }

    /// Runs one image batch through the model and returns per-label scores
    /// in label index order.
    ///
    /// # Errors
    /// - `ModelError` if tensor creation, model execution, or output
    ///   extraction fails
    /// - `PredictionError` if the output does not hold exactly one score per
    ///   known label
    pub(crate) fn predict(&self, tensor: &ImageTensor) -> Result<[f32; Label::COUNT], ClassifierError> {
        let input_view = tensor.view().into_dyn();
        let input = input_view.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&input)
                .map_err(|e| ClassifierError::ModelError(format!("Failed to create input tensor: {}", e)))?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to run model: {}", e)))?;
        let output = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::ModelError(format!("Failed to extract output tensor: {}", e)))?;

        let values: Vec<f32> = output.iter().copied().collect();
        if values.len() != Label::COUNT {
            return Err(ClassifierError::PredictionError(format!(
                "Model produced {} scores, expected {}",
                values.len(),
                Label::COUNT
            )));
        }

        let mut scores = [0.0f32; Label::COUNT];
        scores.copy_from_slice(&values);
        Ok(scores)
    }
}
