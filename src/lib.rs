//! Stateless HTTP façade over four pre-trained agricultural prediction
//! artifacts: crop recommendation, plant-disease detection, crop-yield
//! estimation, and weather-based crop suitability.

pub mod config;
pub mod encoders;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod tables;
pub mod weather;
