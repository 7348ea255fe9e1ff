//! LINE Messaging API HTTP client.
//!
//! Only the reply endpoint is used: every outbound message answers an
//! inbound event via its single-use reply token.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use super::error::LineError;
use super::message::Message;

/// Default base URL for the Messaging API.
pub const DEFAULT_API_BASE: &str = "https://api.line.me";

/// Maximum number of messages in one reply.
pub const MAX_REPLY_MESSAGES: usize = 5;

/// Configuration for the LINE client.
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Long-lived channel access token
    pub channel_access_token: String,
    /// Base URL for the API (defaults to production)
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LineConfig {
    /// Create a new config with the given channel access token.
    pub fn new(channel_access_token: impl Into<String>) -> Self {
        Self {
            channel_access_token: channel_access_token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: &'a [Message],
}

/// LINE Messaging API client.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    api_base: String,
}

impl LineClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LineConfig) -> Result<Self, LineError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.channel_access_token))
            .map_err(|_| LineError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Reply to an event.
    ///
    /// Reply tokens are single-use and expire shortly after the event, so
    /// a failed reply is never retried.
    pub async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.api_base);
        let messages = &messages[..messages.len().min(MAX_REPLY_MESSAGES)];

        let response = self
            .http
            .post(&url)
            .json(&ReplyRequest {
                reply_token,
                messages,
            })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LineError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LineError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!(messages = messages.len(), "reply sent");
        Ok(())
    }
}
