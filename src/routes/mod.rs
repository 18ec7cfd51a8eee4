//! HTTP layer: route table and shared request-field helpers.

pub mod advisor;
pub mod crop_yield;
pub mod disease;
pub mod health;
pub mod recommend;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::state::SharedState;

/// Builds the service router. CORS is restricted to the single configured
/// frontend origin.
pub fn app(state: SharedState, config: &Config) -> anyhow::Result<Router> {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .map_err(|_| anyhow::anyhow!("CORS_ORIGIN is not a valid header value"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .route(
            "/predict-CropRecommendation",
            post(recommend::predict_crop),
        )
        .route("/predict-disease", post(disease::predict_disease))
        .route("/crop-yield-predict", post(crop_yield::predict_yield))
        .route("/weather-advisor", post(advisor::weather_advisor))
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Reads a required numeric field, accepting either a JSON number or a
/// numeric string (the frontend submits form values as strings).
pub(crate) fn require_f32(data: &Value, field: &'static str) -> Result<f32, ApiError> {
    match data.get(field) {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|v| v as f32)
            .ok_or(ApiError::InvalidField(field)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| ApiError::InvalidField(field)),
        _ => Err(ApiError::InvalidField(field)),
    }
}

/// Reads a required integer field, with the same number-or-string leniency.
pub(crate) fn require_i64(data: &Value, field: &'static str) -> Result<i64, ApiError> {
    match data.get(field) {
        Some(Value::Number(n)) => n.as_i64().ok_or(ApiError::InvalidField(field)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidField(field)),
        _ => Err(ApiError::InvalidField(field)),
    }
}

/// Reads a required non-empty string field.
pub(crate) fn require_str<'a>(data: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::InvalidField(field))
}

/// Python-style capitalization: first letter upper, rest lower. Matches the
/// message formatting the frontend was built against.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_accept_numbers_and_strings() {
        let data = json!({"a": 1.5, "b": "2.25", "c": " 3 ", "d": "abc"});
        assert_eq!(require_f32(&data, "a").unwrap(), 1.5);
        assert_eq!(require_f32(&data, "b").unwrap(), 2.25);
        assert_eq!(require_f32(&data, "c").unwrap(), 3.0);
        assert!(require_f32(&data, "d").is_err());
        assert!(require_f32(&data, "missing").is_err());
    }

    #[test]
    fn integer_fields_reject_fractions() {
        let data = json!({"year": 2013, "frac": 2013.5, "s": "1990"});
        assert_eq!(require_i64(&data, "year").unwrap(), 2013);
        assert!(require_i64(&data, "frac").is_err());
        assert_eq!(require_i64(&data, "s").unwrap(), 1990);
    }

    #[test]
    fn capitalize_matches_frontend_expectations() {
        assert_eq!(capitalize("wheat"), "Wheat");
        assert_eq!(capitalize("WHEAT"), "Wheat");
        assert_eq!(capitalize(""), "");
    }
}
