use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

pub const GENERATOR_TEMPERATURE_RANGE: (f32, f32) = (0.6, 0.8);

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub model_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub upstream_timeout_seconds: u64,
    pub generator_temperature: f32,
    pub reviewer_temperature: f32,
    pub max_output_tokens: u32,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let (min_temp, max_temp) = GENERATOR_TEMPERATURE_RANGE;
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            generator_temperature: env::var("GENERATOR_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse::<f32>().ok())
                .map(|t| t.clamp(min_temp, max_temp))
                .unwrap_or(0.7),
            reviewer_temperature: env::var("REVIEWER_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse::<f32>().ok())
                .map(|t| t.clamp(0.0, 2.0))
                .unwrap_or(0.4),
            max_output_tokens: env::var("MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(2000),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.expose_secret().trim().is_empty()
    }

    /// Without a key every generation degrades to the fallback bank, which is
    /// still a working service, so this only warns.
    pub fn warn_on_missing_credentials(&self) {
        if !self.has_api_key() {
            log::warn!(
                "OPENAI_API_KEY is not set; quizzes will be served from the fallback question bank"
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test-key".to_string()),
            openai_api_base: "http://127.0.0.1:9".to_string(),
            model_name: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            upstream_timeout_seconds: 1,
            generator_temperature: 0.7,
            reviewer_temperature: 0.4,
            max_output_tokens: 2000,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.model_name.is_empty());
        assert!(config.generator_temperature >= GENERATOR_TEMPERATURE_RANGE.0);
        assert!(config.generator_temperature <= GENERATOR_TEMPERATURE_RANGE.1);
        assert!(config.max_output_tokens > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.model_name, "test-model");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(1));
        assert!(config.has_api_key());
    }
}
