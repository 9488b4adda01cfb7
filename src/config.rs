use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_GENERATION_API_KEY: &str = "gemini_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generation_api_key: SecretString,
    pub generation_api_base: String,
    pub generation_model: String,
    pub forms_api_base: String,
    pub form_title: String,
    pub cors_allowed_origin: String,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            generation_api_key: SecretString::from(env::var("GEMINI_API_KEY")
                .unwrap_or_else(|_| DEFAULT_GENERATION_API_KEY.to_string())),
            generation_api_base: env::var("GENERATION_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            forms_api_base: env::var("FORMS_API_BASE")
                .unwrap_or_else(|_| "https://forms.googleapis.com/v1".to_string()),
            form_title: env::var("FORM_TITLE").unwrap_or_else(|_| "AI Generated Form".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Reject configuration that only makes sense on a developer machine.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let api_key = self.generation_api_key.expose_secret();
        if api_key.is_empty() || api_key == DEFAULT_GENERATION_API_KEY {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        }

        if self.http_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "HTTP_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            generation_api_key: SecretString::from("test_api_key".to_string()),
            generation_api_base: "http://127.0.0.1:9/openai".to_string(),
            generation_model: "test-model".to_string(),
            forms_api_base: "http://127.0.0.1:9/v1".to_string(),
            form_title: "Test Form".to_string(),
            cors_allowed_origin: "http://localhost:5173".to_string(),
            http_timeout_seconds: 5,
        }
    }
}
