use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Upstream service error: {0}")]
    UpstreamError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

/// Fatal outcomes of assembling and submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("failed to create form: {0}")]
    ShellCreation(String),

    #[error("no valid questions to add ({skipped} skipped)")]
    EmptyPlan { skipped: usize },

    /// The form shell is left on the remote side; nothing deletes it.
    #[error("failed to add questions to form {form_id}: {reason}")]
    BatchCreation { form_id: String, reason: String },
}

/// Raw generator output that could not be read as a question set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("generation response was empty")]
    EmptyInput,

    #[error("generation response is not valid JSON: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::GenerationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::UpstreamError(format!("generation service: {}", err))
    }
}
impl From<AssemblyError> for AppError {
    fn from(err: AssemblyError) -> Self {
        match err {
            AssemblyError::EmptyPlan { .. } => AppError::GenerationFailed(err.to_string()),
            AssemblyError::ShellCreation(_) | AssemblyError::BatchCreation { .. } => {
                AppError::UpstreamError(err.to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
