//! ONNX-backed implementations of the model traits, run with tract.

use std::path::Path;

use anyhow::Context;
use image::{imageops::FilterType, DynamicImage};
use tract_onnx::prelude::*;

use super::{CropClassifier, DiseaseClassifier, ModelError, YieldRegressor};

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

fn load_plan(path: &Path, shape: &[usize]) -> anyhow::Result<Plan> {
    let dims: TVec<TDim> = shape.iter().map(|d| d.to_dim()).collect();
    tract_onnx::onnx()
        .model_for_path(path)
        .and_then(|m| m.with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), dims)))
        .and_then(|m| m.into_optimized())
        .and_then(|m| m.into_runnable())
        .with_context(|| format!("loading model from {}", path.display()))
}

fn scalar_output<T: Datum + Copy>(outputs: &TVec<TValue>) -> Result<T, ModelError> {
    let first = outputs.first().ok_or(ModelError::OutputShape)?;
    let view = first.to_array_view::<T>()?;
    view.iter().next().copied().ok_or(ModelError::OutputShape)
}

/// Random-forest crop recommender exported to ONNX.
pub struct OnnxCropClassifier {
    plan: Plan,
}

impl OnnxCropClassifier {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            plan: load_plan(path, &[1, 8])?,
        })
    }
}

impl CropClassifier for OnnxCropClassifier {
    fn predict_label(&self, features: &[f32; 8]) -> Result<i64, ModelError> {
        let input = tract_ndarray::Array2::from_shape_vec((1, 8), features.to_vec())
            .map_err(|e| ModelError::Inference(e.into()))?;
        let outputs = self.plan.run(tvec!(input.into_tensor().into()))?;
        // sklearn exporters emit the label tensor as i64; accept a float
        // label tensor as well.
        match scalar_output::<i64>(&outputs) {
            Ok(label) => Ok(label),
            Err(_) => scalar_output::<f32>(&outputs).map(|v| v.round() as i64),
        }
    }
}

/// Residual-network plant-disease classifier exported to ONNX.
///
/// Preprocessing mirrors the training transform: resize to 224x224, scale to
/// [0,1], normalize with the ImageNet channel statistics, CHW layout.
pub struct OnnxDiseaseClassifier {
    plan: Plan,
}

const IMAGE_SIZE: usize = 224;
const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

impl OnnxDiseaseClassifier {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            plan: load_plan(path, &[1, 3, IMAGE_SIZE, IMAGE_SIZE])?,
        })
    }

    fn to_tensor(image: &DynamicImage) -> Result<Tensor, ModelError> {
        let resized = image
            .resize_exact(IMAGE_SIZE as u32, IMAGE_SIZE as u32, FilterType::Triangle)
            .to_rgb8();
        let mut data = vec![0f32; 3 * IMAGE_SIZE * IMAGE_SIZE];
        for (x, y, pixel) in resized.enumerate_pixels() {
            for c in 0..3 {
                let value = pixel[c] as f32 / 255.0;
                data[c * IMAGE_SIZE * IMAGE_SIZE + y as usize * IMAGE_SIZE + x as usize] =
                    (value - IMAGENET_MEAN[c]) / IMAGENET_STD[c];
            }
        }
        let array =
            tract_ndarray::Array4::from_shape_vec((1, 3, IMAGE_SIZE, IMAGE_SIZE), data)
                .map_err(|e| ModelError::Inference(e.into()))?;
        Ok(array.into_tensor())
    }
}

impl DiseaseClassifier for OnnxDiseaseClassifier {
    fn predict_class(&self, image: &DynamicImage) -> Result<usize, ModelError> {
        let input = Self::to_tensor(image)?;
        let outputs = self.plan.run(tvec!(input.into()))?;
        let logits = outputs.first().ok_or(ModelError::OutputShape)?;
        let view = logits.to_array_view::<f32>()?;
        let best = view
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .ok_or(ModelError::OutputShape)?;
        Ok(best)
    }
}

/// Decision-tree yield regressor exported to ONNX.
pub struct OnnxYieldRegressor {
    plan: Plan,
    width: usize,
}

impl OnnxYieldRegressor {
    /// `width` is the encoded row width produced by the fitted column
    /// preprocessor; it depends on the trained category lists.
    pub fn load(path: &Path, width: usize) -> anyhow::Result<Self> {
        Ok(Self {
            plan: load_plan(path, &[1, width])?,
            width,
        })
    }
}

impl YieldRegressor for OnnxYieldRegressor {
    fn predict(&self, features: &[f32]) -> Result<f32, ModelError> {
        if features.len() != self.width {
            return Err(ModelError::OutputShape);
        }
        let input = tract_ndarray::Array2::from_shape_vec((1, self.width), features.to_vec())
            .map_err(|e| ModelError::Inference(e.into()))?;
        let outputs = self.plan.run(tvec!(input.into_tensor().into()))?;
        scalar_output::<f32>(&outputs)
    }
}
