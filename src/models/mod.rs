//! Model store: load-once, read-only handles to the pre-trained artifacts.
//!
//! Handlers depend on the traits here, not on the ONNX runtime, so tests can
//! inject mock predictors without any artifact files on disk.

mod onnx;

pub use onnx::{OnnxCropClassifier, OnnxDiseaseClassifier, OnnxYieldRegressor};

use image::DynamicImage;
use thiserror::Error;
use tract_onnx::prelude::TractError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Inference(#[from] TractError),
    #[error("unexpected model output shape")]
    OutputShape,
}

/// Tabular classifier behind the crop recommendation endpoint. Input is the
/// scaled 8-feature vector, output the raw integer class label.
pub trait CropClassifier: Send + Sync {
    fn predict_label(&self, features: &[f32; 8]) -> Result<i64, ModelError>;
}

/// Image classifier behind the disease endpoint. Returns the arg-max class
/// index over the known disease labels.
pub trait DiseaseClassifier: Send + Sync {
    fn predict_class(&self, image: &DynamicImage) -> Result<usize, ModelError>;
}

/// Regressor behind the yield endpoint. Input is the preprocessed feature
/// row, output a single yield scalar.
pub trait YieldRegressor: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<f32, ModelError>;
}
