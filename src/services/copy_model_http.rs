//! Copy model client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{CompletionRequest, CompletionResponse, CopyModel};

const X_API_KEY: &str = "x-api-key";

/// HTTP client for the text-generation API.
#[derive(Clone)]
pub struct HttpCopyModel {
    api_key: String,
    api_url: Url,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

impl std::fmt::Debug for HttpCopyModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCopyModel")
            .field("api_url", &self.api_url)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCopyModel {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ModelApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    /// Resolve the API key from the environment or key file and build a client.
    pub fn from_config(config: &ModelApiConfig) -> Result<Self, AppError> {
        let api_key = config.resolve_api_key()?;
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    completion: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    error: Option<String>,
}

impl CopyModel for HttpCopyModel {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        let api_request = ApiRequest {
            model: &request.model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
        };

        let mut last_error = None;
        let max_attempts = self.max_retries.max(1); // Ensure at least one attempt

        for attempt in 0..max_attempts {
            if attempt > 0 {
                // Exponential backoff: base * 2^(attempt-1)
                let delay = self.retry_delay_ms * 2_u64.pow(attempt.saturating_sub(1));
                std::thread::sleep(Duration::from_millis(delay));
                eprintln!("Retrying... (attempt {}/{})", attempt + 1, max_attempts);
            }

            match self.send_request(&api_request) {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if Self::is_retryable(&e) {
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::GenerationFailed("Request failed after all retries".into())))
    }
}

impl HttpCopyModel {
    fn send_request(&self, request: &ApiRequest<'_>) -> Result<CompletionResponse, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(X_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::GenerationFailed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            let api_response: ApiResponse = response
                .json()
                .map_err(|e| AppError::MalformedResponse(format!("Failed to parse body: {}", e)))?;

            let text = api_response
                .completion
                .or(api_response.text)
                .ok_or_else(|| AppError::MalformedResponse("No completion text in body".into()))?;

            Ok(CompletionResponse { text })
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(AppError::config_error(format!(
                "API key rejected ({}). Check {} or the configured key file.",
                status.as_u16(),
                crate::domain::API_KEY_ENV
            )))
        } else if status.as_u16() == 429 {
            Err(AppError::GenerationFailed("Rate limited (429)".into()))
        } else if status.is_server_error() {
            Err(AppError::GenerationFailed(format!("Server error ({})", status.as_u16())))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::GenerationFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )))
        }
    }

    fn is_retryable(error: &AppError) -> bool {
        match error {
            AppError::GenerationFailed(msg) => {
                msg.contains("429") || msg.contains("Server error") || msg.contains("timed out")
            }
            _ => false,
        }
    }
}
