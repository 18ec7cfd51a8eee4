//! Client for the external weather API used by the weather advisor.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;

/// Current conditions for a district, reduced to what the advisor needs.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
}

/// Source of current weather data. The advisor handler only sees this trait;
/// tests substitute a stub instead of calling out over the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for a district. `Ok(None)` means the
    /// upstream API answered but had no data for the query; `Err` is a
    /// transport-level failure. The handler treats both as unavailable.
    async fn current(&self, district: &str) -> Result<Option<WeatherReport>, reqwest::Error>;
}

/// OpenWeatherMap-backed provider. One GET per call, metric units, district
/// scoped to Pakistan. No retries; a request timeout bounds slow upstreams.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: config.weather_api_url.clone(),
            api_key: config.weather_api_key.clone(),
        })
    }
}

#[derive(Deserialize)]
struct OwmResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, district: &str) -> Result<Option<WeatherReport>, reqwest::Error> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", format!("{district},PK").as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body: OwmResponse = response.json().await?;
        Ok(Some(WeatherReport {
            temperature: body.main.temp,
            humidity: body.main.humidity,
            description: body
                .weather
                .first()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
        }))
    }
}
