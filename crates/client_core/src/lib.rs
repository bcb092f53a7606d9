use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::TaskKind,
    protocol::{TaskOutput, TaskRequest},
};
use thiserror::Error;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// A failed inference request. The UI presents every variant the same way;
/// the variants only shape the diagnostic message.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("unexpected response shape from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InferenceError {
    pub fn url(&self) -> &str {
        match self {
            InferenceError::Transport { url, .. }
            | InferenceError::Status { url, .. }
            | InferenceError::Decode { url, .. } => url,
        }
    }
}

#[async_trait]
pub trait InferenceHandle: Send + Sync {
    /// Sends one task request and returns the decoded output for that task.
    async fn submit(&self, request: TaskRequest) -> Result<TaskOutput, InferenceError>;

    fn base_url(&self) -> &str;
}

/// HTTP client for the remote inference service.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn endpoint(&self, task: TaskKind) -> String {
        format!("{}/api/{}", self.base_url, task.api_path())
    }

    async fn post_json(&self, url: &str, request: &TaskRequest) -> Result<Vec<u8>, InferenceError> {
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|source| InferenceError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| InferenceError::Transport {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl InferenceHandle for InferenceClient {
    async fn submit(&self, request: TaskRequest) -> Result<TaskOutput, InferenceError> {
        let task = request.kind();
        let url = self.endpoint(task);
        tracing::debug!(task = %task, url = %url, "posting inference request");

        let body = self.post_json(&url, &request).await?;
        TaskOutput::decode(task, &body).map_err(|source| InferenceError::Decode { url, source })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
