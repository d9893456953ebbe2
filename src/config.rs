use crate::error::SessionError;
use anyhow::Result;
use serde::Deserialize;

/// Environment variable holding the Gemini API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub describe: DescribeConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DescribeConfig {
    /// Gemini model used for description generation
    pub model: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Read the backend credential from the environment
    ///
    /// Absence is a fatal configuration error, surfaced before any session
    /// can start.
    pub fn api_key(&self) -> Result<String, SessionError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SessionError::Configuration(format!(
                "{} environment variable not set",
                API_KEY_ENV
            ))),
        }
    }
}
