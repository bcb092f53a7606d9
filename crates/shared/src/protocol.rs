use serde::{Deserialize, Serialize};

use crate::domain::TaskKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotRequest {
    pub text: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotClassification {
    pub sequence: String,
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// A request body for one of the inference endpoints. Serializes as the bare body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskRequest {
    Sentiment(SentimentRequest),
    ZeroShot(ZeroShotRequest),
    TextGeneration(TextGenerationRequest),
}

impl TaskRequest {
    pub fn sentiment(text: impl Into<String>) -> Self {
        Self::Sentiment(SentimentRequest { text: text.into() })
    }

    /// Builds a zero-shot request from the raw comma-separated label field.
    pub fn zero_shot(text: impl Into<String>, raw_labels: &str) -> Self {
        Self::ZeroShot(ZeroShotRequest {
            text: text.into(),
            labels: split_labels(raw_labels),
        })
    }

    pub fn text_generation(prompt: impl Into<String>) -> Self {
        Self::TextGeneration(TextGenerationRequest {
            prompt: prompt.into(),
        })
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TaskRequest::Sentiment(_) => TaskKind::Sentiment,
            TaskRequest::ZeroShot(_) => TaskKind::ZeroShot,
            TaskRequest::TextGeneration(_) => TaskKind::TextGeneration,
        }
    }
}

/// Decoded response body, typed by the task that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutput {
    Sentiment(Vec<SentimentScore>),
    ZeroShot(ZeroShotClassification),
    TextGeneration(Vec<GeneratedText>),
}

impl TaskOutput {
    /// Decodes a raw response body into the shape `task` expects.
    pub fn decode(task: TaskKind, body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match task {
            TaskKind::Sentiment => TaskOutput::Sentiment(serde_json::from_slice(body)?),
            TaskKind::ZeroShot => TaskOutput::ZeroShot(serde_json::from_slice(body)?),
            TaskKind::TextGeneration => TaskOutput::TextGeneration(serde_json::from_slice(body)?),
        })
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TaskOutput::Sentiment(_) => TaskKind::Sentiment,
            TaskOutput::ZeroShot(_) => TaskKind::ZeroShot,
            TaskOutput::TextGeneration(_) => TaskKind::TextGeneration,
        }
    }
}

/// Splits the label field on every literal comma. Entries are not trimmed and
/// empty entries are kept, so `"a, b,c"` yields `["a", " b", "c"]`.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
