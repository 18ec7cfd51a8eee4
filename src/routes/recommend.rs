//! POST /predict-CropRecommendation

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use super::{capitalize, require_f32, require_str};
use crate::encoders::district_index;
use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;
use crate::tables::crop_for_label;

pub async fn predict_crop(
    State(state): State<SharedState>,
    Json(data): Json<Value>,
) -> ApiResult<Json<Value>> {
    let n = require_f32(&data, "N")?;
    let p = require_f32(&data, "P")?;
    let k = require_f32(&data, "K")?;
    let temperature = require_f32(&data, "temperature")?;
    let humidity = require_f32(&data, "humidity")?;
    let ph = require_f32(&data, "ph")?;
    let rainfall = require_f32(&data, "rainfall")?;
    let district = require_str(&data, "district")?;

    let district_encoded = district_index(district)
        .ok_or_else(|| ApiError::UnknownDistrict(district.to_string()))?;

    let features = [
        n,
        p,
        k,
        temperature,
        humidity,
        ph,
        rainfall,
        district_encoded as f32,
    ];
    let scaled = state.scaler.transform(&features);
    let label = state.recommender.predict_label(&scaled)?;

    let message = match crop_for_label(label) {
        Some(crop) => {
            info!(district, label, crop, "crop recommendation served");
            format!("You should grow {} in your farm.", capitalize(crop))
        }
        None => {
            "Sorry, we are not able to recommend a proper crop for this environment.".to_string()
        }
    };

    Ok(Json(json!({ "message": message })))
}
