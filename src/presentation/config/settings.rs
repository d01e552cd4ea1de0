use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Environment-variable configuration with local-development defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            extraction: ExtractionSettings {
                endpoint: std::env::var("EXTRACTION_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                timeout_secs: std::env::var("EXTRACTION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(120),
            },
        }
    }
}
