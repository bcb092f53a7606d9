//! Pure view model for the shared results region.

use std::fmt;

use shared::protocol::TaskOutput;

use super::reducer::{PlaygroundState, RequestPhase};

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: &'static str,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultPane {
    Empty,
    Loading,
    Result(ResultView),
    Error { title: String, message: String },
}

impl ResultPane {
    pub fn from_state(state: &PlaygroundState) -> Self {
        match state.phase() {
            RequestPhase::Idle => ResultPane::Empty,
            RequestPhase::Loading { .. } => ResultPane::Loading,
            RequestPhase::Failed { task, message } => ResultPane::Error {
                title: format!("{} request failed", task.display_name()),
                message: message.clone(),
            },
            RequestPhase::Success { output, .. } => {
                render_output(output).map_or(ResultPane::Empty, ResultPane::Result)
            }
        }
    }
}

/// Formats a decoded response. Empty sentiment or generation arrays render nothing.
pub fn render_output(output: &TaskOutput) -> Option<ResultView> {
    match output {
        TaskOutput::Sentiment(scores) => {
            // Only the top-ranked entry is shown.
            let top = scores.first()?;
            Some(ResultView {
                title: "Sentiment Analysis Result",
                rows: vec![
                    ResultRow::new("Label", top.label.clone()),
                    ResultRow::new("Score", top.score.to_string()),
                ],
            })
        }
        TaskOutput::ZeroShot(classification) => Some(ResultView {
            title: "Zero-shot Classification Result",
            rows: vec![
                ResultRow::new("Sequence", classification.sequence.clone()),
                ResultRow::new("Labels", classification.labels.join(", ")),
                ResultRow::new("Scores", join_scores(&classification.scores)),
            ],
        }),
        TaskOutput::TextGeneration(items) => {
            if items.is_empty() {
                return None;
            }
            Some(ResultView {
                title: "Text Generation Result",
                rows: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        ResultRow::new(
                            format!("Generated Text {}", index + 1),
                            item.generated_text.clone(),
                        )
                    })
                    .collect(),
            })
        }
    }
}

fn join_scores(scores: &[f64]) -> String {
    scores
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
