//! POST /weather-advisor

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use super::capitalize;
use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;
use crate::tables::{assess, crop_conditions, Suitability};

pub async fn weather_advisor(
    State(state): State<SharedState>,
    Json(data): Json<Value>,
) -> ApiResult<Json<Value>> {
    let district = data
        .get("district")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingAdvisorField)?;
    let crop = data
        .get("crop")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingAdvisorField)?;

    let report = match state.weather.current(district).await {
        Ok(Some(report)) => report,
        Ok(None) => return Err(ApiError::WeatherUnavailable),
        Err(err) => {
            warn!(district, "weather fetch failed: {err}");
            return Err(ApiError::WeatherUnavailable);
        }
    };

    let conditions = crop_conditions(crop).ok_or(ApiError::InvalidCrop)?;

    let recommendation = match assess(conditions, report.temperature, report.humidity) {
        Suitability::Suitable => format!(
            "{} is suitable in {} based on current weather.",
            capitalize(crop),
            district
        ),
        Suitability::PartiallySuitable => format!(
            "{} is partially suitable in {}. Conditions are close.",
            capitalize(crop),
            district
        ),
        Suitability::NotSuitable => format!(
            "{} is not suitable in {} based on current weather.",
            capitalize(crop),
            district
        ),
    };

    Ok(Json(json!({
        "district": district,
        "temperature": report.temperature,
        "humidity": report.humidity,
        "weather": report.description,
        "crop": crop,
        "recommendation": recommendation,
    })))
}
