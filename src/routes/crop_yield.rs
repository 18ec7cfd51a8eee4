//! POST /crop-yield-predict

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use super::{require_f32, require_i64, require_str};
use crate::encoders::EncodeError;
use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

pub async fn predict_yield(
    State(state): State<SharedState>,
    Json(data): Json<Value>,
) -> ApiResult<Json<Value>> {
    let year = require_i64(&data, "Year")?;
    let rainfall = require_f32(&data, "average_rain_fall_mm_per_year")?;
    let pesticides = require_f32(&data, "pesticides_tonnes")?;
    let avg_temp = require_f32(&data, "avg_temp")?;
    let area = require_str(&data, "Area")?;
    let item = require_str(&data, "Item")?;

    let features = state
        .preprocessor
        .encode(year, rainfall, pesticides, avg_temp, area, item)
        .map_err(|e| match e {
            EncodeError::UnknownArea(value) => ApiError::UnknownCategory {
                kind: "Area",
                value,
            },
            EncodeError::UnknownItem(value) => ApiError::UnknownCategory {
                kind: "Item",
                value,
            },
        })?;

    let raw = state.yield_model.predict(&features)?;
    let value = (raw as f64 * 100.0).round() / 100.0;
    info!(area, item, year, value, "yield prediction served");

    // Doubly nested for shape compatibility with the consuming frontend.
    Ok(Json(json!({ "prediction": [[value]] })))
}
