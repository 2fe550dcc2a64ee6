//! Anthropic Messages API implementation of the model client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::client::ModelClient;
use super::error::RewriteError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f64 = 0.7;
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Configuration for [`AnthropicModelClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicConfig {
    /// Base API URL (e.g., `https://api.anthropic.com/v1`).
    pub base_url: String,
    /// Model identifier sent in messages requests.
    pub model: String,
    /// API key sent via the `x-api-key` header.
    pub api_key: Option<String>,
    /// HTTP timeout covering the whole completion round-trip.
    pub timeout: Duration,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Messages-API model client.
///
/// The credential and the HTTP client are validated and built once at
/// construction time, so a missing key fails startup rather than individual
/// requests.
#[derive(Debug, Clone)]
pub struct AnthropicModelClient {
    config: AnthropicConfig,
    api_key: String,
    http: Client,
}

impl AnthropicModelClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::Configuration`] when the API key is absent or
    /// the HTTP client cannot be built.
    pub fn new(config: AnthropicConfig) -> Result<Self, RewriteError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| RewriteError::Configuration {
                message: concat!(
                    "Anthropic API key is required (use --api-key, ",
                    "RETONE_API_KEY, or ANTHROPIC_API_KEY)"
                )
                .to_owned(),
            })?;
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| RewriteError::Configuration {
                message: format!("failed to configure model HTTP client: {error}"),
            })?;

        Ok(Self {
            config,
            api_key,
            http,
        })
    }
}

#[async_trait]
impl ModelClient for AnthropicModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, RewriteError> {
        let endpoint = format!("{}/messages", self.config.base_url.trim_end_matches('/'));
        let payload = MessagesRequest {
            model: self.config.model.as_str(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![MessageTurn {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(endpoint)
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await
            .map_err(|error| RewriteError::Network {
                message: format!("model request transport failed: {error}"),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = read_error_body(response).await;
            return Err(RewriteError::Authentication {
                message: format!(
                    "provider rejected the API key (status {}): {body}",
                    status.as_u16()
                ),
            });
        }
        if status != StatusCode::OK {
            let body = read_error_body(response).await;
            return Err(RewriteError::Api {
                message: format!(
                    "model request failed with status {}: {body}",
                    status.as_u16()
                ),
            });
        }

        let reply: MessagesResponse = response.json().await.map_err(|error| RewriteError::Api {
            message: format!("model response JSON decoding failed: {error}"),
        })?;

        first_text_block(&reply)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(|| RewriteError::Api {
                message: "model response did not contain assistant text".to_owned(),
            })
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<MessageTurn<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

fn first_text_block(response: &MessagesResponse) -> Option<&str> {
    response
        .content
        .iter()
        .find_map(|block| block.text.as_deref())
}

async fn read_error_body(response: Response) -> String {
    response.text().await.map_or_else(
        |_| "(failed to read error response body)".to_owned(),
        |content| truncate_for_message(content.as_str(), 160),
    )
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod tests;
