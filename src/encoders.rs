//! Feature encoders: pure mappings from raw request fields to the numeric
//! vectors the models were trained on.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

/// District names the recommendation model was trained with. The encoded
/// feature is the position in this list, so order matters.
pub const PUNJAB_DISTRICTS: [&str; 36] = [
    "Attock",
    "Bahawalnagar",
    "Bahawalpur",
    "Bhakkar",
    "Chakwal",
    "Chiniot",
    "Dera Ghazi Khan",
    "Faisalabad",
    "Gujranwala",
    "Gujrat",
    "Hafizabad",
    "Jhang",
    "Jhelum",
    "Kasur",
    "Khanewal",
    "Khushab",
    "Lahore",
    "Layyah",
    "Lodhran",
    "Mandi Bahauddin",
    "Mianwali",
    "Multan",
    "Muzaffargarh",
    "Narowal",
    "Nankana Sahib",
    "Okara",
    "Pakpattan",
    "Rahim Yar Khan",
    "Rajanpur",
    "Rawalpindi",
    "Sahiwal",
    "Sargodha",
    "Sheikhupura",
    "Sialkot",
    "Toba Tek Singh",
    "Vehari",
];

/// Returns the integer encoding of a district name, or `None` when the name
/// is not part of the trained enumeration. There is no fallback index.
pub fn district_index(district: &str) -> Option<usize> {
    PUNJAB_DISTRICTS.iter().position(|d| *d == district)
}

#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("unknown Area '{0}'")]
    UnknownArea(String),
    #[error("unknown Item '{0}'")]
    UnknownItem(String),
}

/// Fitted standard-scaler parameters for the crop recommendation features,
/// exported from the training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl Scaler {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scaler parameters from {}", path.display()))?;
        let scaler: Scaler = serde_json::from_str(&raw)
            .with_context(|| format!("parsing scaler parameters from {}", path.display()))?;
        anyhow::ensure!(
            scaler.mean.len() == 8 && scaler.scale.len() == 8,
            "scaler parameters must cover exactly 8 features"
        );
        Ok(scaler)
    }

    pub fn transform(&self, features: &[f32; 8]) -> [f32; 8] {
        let mut out = [0.0; 8];
        for (i, x) in features.iter().enumerate() {
            out[i] = (x - self.mean[i]) / self.scale[i];
        }
        out
    }
}

/// Fitted column preprocessor for the yield regressor: the four numeric
/// columns pass through, Area and Item are one-hot encoded against the
/// category lists seen at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldPreprocessor {
    areas: Vec<String>,
    items: Vec<String>,
}

impl YieldPreprocessor {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading preprocessor parameters from {}", path.display()))?;
        let pre: YieldPreprocessor = serde_json::from_str(&raw)
            .with_context(|| format!("parsing preprocessor parameters from {}", path.display()))?;
        anyhow::ensure!(
            !pre.areas.is_empty() && !pre.items.is_empty(),
            "preprocessor category lists must not be empty"
        );
        Ok(pre)
    }

    /// Width of the encoded feature vector.
    pub fn width(&self) -> usize {
        4 + self.areas.len() + self.items.len()
    }

    pub fn encode(
        &self,
        year: i64,
        rainfall: f32,
        pesticides: f32,
        avg_temp: f32,
        area: &str,
        item: &str,
    ) -> Result<Vec<f32>, EncodeError> {
        let area_idx = self
            .areas
            .iter()
            .position(|a| a == area)
            .ok_or_else(|| EncodeError::UnknownArea(area.to_string()))?;
        let item_idx = self
            .items
            .iter()
            .position(|i| i == item)
            .ok_or_else(|| EncodeError::UnknownItem(item.to_string()))?;

        let mut features = vec![0.0; self.width()];
        features[0] = year as f32;
        features[1] = rainfall;
        features[2] = pesticides;
        features[3] = avg_temp;
        features[4 + area_idx] = 1.0;
        features[4 + self.areas.len() + item_idx] = 1.0;
        Ok(features)
    }
}
