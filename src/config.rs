//! Process configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub body_limit_bytes: usize,
    pub model_dir: PathBuf,
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5020".into())
            .parse::<u16>()
            .context("PORT must be a valid number between 0 and 65535")?;

        let body_limit_bytes = env::var("BODY_LIMIT_MB")
            .unwrap_or_else(|_| "5".into())
            .parse::<usize>()
            .context("BODY_LIMIT_MB must be a valid integer")?
            * 1024
            * 1024;

        let model_dir = PathBuf::from(env::var("MODEL_DIR").unwrap_or_else(|_| "./models".into()));

        // The key is deliberately not defaulted: the service refuses to start
        // without one rather than shipping a credential in source.
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY environment variable not set")?;

        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.into());

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".into());

        Ok(Self {
            port,
            body_limit_bytes,
            model_dir,
            weather_api_key,
            weather_api_url,
            cors_origin,
        })
    }
}
