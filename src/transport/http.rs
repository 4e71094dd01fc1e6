use crate::client::Endpoint;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Authenticated HTTP dispatcher for the TTS.Monster API.
///
/// Every endpoint is a `POST` to `{base_url}{endpoint}` carrying the raw API
/// key in `Authorization`. One request per call; no retries.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url.join(endpoint.path()).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot build URL for '{}': {}", endpoint, e),
                ErrorContext::new().with_field_path("base_url"),
            )
        })
    }

    /// POST to `endpoint`, with `body` as JSON when given, and decode a JSON reply.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        let mut request = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.api_key.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(%endpoint, status = status.as_u16(), "TTS.Monster response");

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote_message(status, &text),
            });
        }

        serde_json::from_str(&text).map_err(|e| Error::InvalidResponse {
            endpoint: endpoint.to_string(),
            message: if text.trim().is_empty() {
                "empty body".to_string()
            } else {
                e.to_string()
            },
        })
    }

    /// Fetch an arbitrary URL (e.g. generated audio) as raw bytes.
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(url, status = status.as_u16(), len = bytes.len(), "audio download");

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote_message(status, &String::from_utf8_lossy(&bytes)),
            });
        }
        Ok(bytes)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Parse a base URL, forcing a trailing slash so endpoint paths append to it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL: {}", e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(raw.to_string()),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "base URL must use http or https",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(raw.to_string()),
        ));
    }
    Ok(url)
}

/// Pull a human-readable message out of an error body.
fn remote_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let found = json
            .get("message")
            .or_else(|| json.get("error").and_then(|e| e.get("message")))
            .or_else(|| json.get("error"))
            .and_then(|v| v.as_str());
        if let Some(msg) = found {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
