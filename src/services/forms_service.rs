use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::dto::forms_api::{
        BatchUpdateFormRequest, BatchUpdateFormResponse, CreateFormRequest, CreateFormResponse,
    },
};

/// Batched create/update surface of a forms-hosting service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsService: Send + Sync {
    /// Create an empty form and return its id.
    async fn create_form(&self, title: &str) -> AppResult<String>;

    async fn batch_update(
        &self,
        form_id: &str,
        request: BatchUpdateFormRequest,
    ) -> AppResult<BatchUpdateFormResponse>;
}

/// Builds a [`FormsService`] bound to one caller's access token.
#[cfg_attr(test, mockall::automock)]
pub trait FormsConnector: Send + Sync {
    fn connect(&self, access_token: SecretString) -> Box<dyn FormsService>;
}

pub struct GoogleFormsConnector {
    http: Client,
    api_base: String,
}

impl GoogleFormsConnector {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    pub fn build_http_client(timeout_seconds: u64) -> AppResult<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))
    }
}

impl FormsConnector for GoogleFormsConnector {
    fn connect(&self, access_token: SecretString) -> Box<dyn FormsService> {
        Box::new(GoogleFormsClient {
            http: self.http.clone(),
            api_base: self.api_base.trim_end_matches('/').to_string(),
            access_token,
        })
    }
}

/// Google Forms REST API v1 over `reqwest`.
pub struct GoogleFormsClient {
    http: Client,
    api_base: String,
    access_token: SecretString,
}

impl GoogleFormsClient {
    fn forms_url(&self) -> String {
        format!("{}/forms", self.api_base)
    }

    fn batch_update_url(&self, form_id: &str) -> String {
        format!("{}/forms/{}:batchUpdate", self.api_base, form_id)
    }

    async fn send_json<B, R>(&self, url: String, body: &B) -> AppResult<R>
    where
        B: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach forms service at {}: {}", url, e);
                AppError::UpstreamError(format!("forms service unreachable: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("Forms service returned {} for {}: {}", status, url, body);
            return Err(match status.as_u16() {
                401 | 403 => AppError::Unauthorized(format!("forms service rejected token: {}", body)),
                _ => AppError::UpstreamError(format!("forms service returned {}: {}", status, body)),
            });
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl FormsService for GoogleFormsClient {
    async fn create_form(&self, title: &str) -> AppResult<String> {
        let created: CreateFormResponse = self
            .send_json(self.forms_url(), &CreateFormRequest::titled(title))
            .await?;
        log::debug!("Created form {}", created.form_id);
        Ok(created.form_id)
    }

    async fn batch_update(
        &self,
        form_id: &str,
        request: BatchUpdateFormRequest,
    ) -> AppResult<BatchUpdateFormResponse> {
        log::debug!(
            "Sending batchUpdate with {} request(s) to form {}",
            request.requests.len(),
            form_id
        );
        self.send_json(self.batch_update_url(form_id), &request).await
    }
}
