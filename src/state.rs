//! Shared application state: the injected model context.
//!
//! Everything here is loaded once at startup and read-only afterwards.
//! Handlers receive the context through axum state; tests build one from
//! mock predictors.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::encoders::{Scaler, YieldPreprocessor};
use crate::models::{
    CropClassifier, DiseaseClassifier, OnnxCropClassifier, OnnxDiseaseClassifier,
    OnnxYieldRegressor, YieldRegressor,
};
use crate::weather::{OpenWeatherClient, WeatherProvider};

pub struct AppState {
    pub recommender: Box<dyn CropClassifier>,
    pub scaler: Scaler,
    pub disease: Box<dyn DiseaseClassifier>,
    pub yield_model: Box<dyn YieldRegressor>,
    pub preprocessor: YieldPreprocessor,
    pub weather: Box<dyn WeatherProvider>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Loads every artifact from `config.model_dir` and wires up the live
    /// weather client. Any missing or unreadable artifact aborts startup.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let dir = &config.model_dir;

        let scaler = Scaler::from_path(&dir.join("scaler.json"))?;
        let recommender = OnnxCropClassifier::load(&dir.join("crop_recommender.onnx"))?;
        info!("crop recommendation model loaded");

        let disease = OnnxDiseaseClassifier::load(&dir.join("plant_disease.onnx"))?;
        info!("plant disease model loaded");

        let preprocessor = YieldPreprocessor::from_path(&dir.join("preprocessor.json"))?;
        let yield_model =
            OnnxYieldRegressor::load(&dir.join("yield_regressor.onnx"), preprocessor.width())?;
        info!("yield prediction model loaded");

        let weather = OpenWeatherClient::new(config)?;

        Ok(Self {
            recommender: Box::new(recommender),
            scaler,
            disease: Box::new(disease),
            yield_model: Box::new(yield_model),
            preprocessor,
            weather: Box::new(weather),
        })
    }
}
