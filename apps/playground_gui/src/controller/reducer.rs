//! Owned UI state for the playground and the transitions that mutate it.

use shared::{
    domain::{RequestSeq, TaskKind},
    protocol::{TaskOutput, TaskRequest},
};

/// Raw text of the four input fields, edited directly by the widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInputs {
    pub sentiment_text: String,
    pub zero_shot_text: String,
    /// Comma-separated; split verbatim when a request is built.
    pub zero_shot_labels: String,
    pub generation_prompt: String,
}

impl TaskInputs {
    pub fn build_request(&self, task: TaskKind) -> TaskRequest {
        match task {
            TaskKind::Sentiment => TaskRequest::sentiment(self.sentiment_text.clone()),
            TaskKind::ZeroShot => {
                TaskRequest::zero_shot(self.zero_shot_text.clone(), &self.zero_shot_labels)
            }
            TaskKind::TextGeneration => {
                TaskRequest::text_generation(self.generation_prompt.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading {
        task: TaskKind,
        seq: RequestSeq,
    },
    Success {
        task: TaskKind,
        output: TaskOutput,
    },
    Failed {
        task: TaskKind,
        message: String,
    },
}

impl RequestPhase {
    pub fn task(&self) -> Option<TaskKind> {
        match self {
            RequestPhase::Idle => None,
            RequestPhase::Loading { task, .. }
            | RequestPhase::Success { task, .. }
            | RequestPhase::Failed { task, .. } => Some(*task),
        }
    }
}

/// A request that has been registered with the state and still has to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub seq: RequestSeq,
    pub request: TaskRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionDisposition {
    Applied,
    /// Superseded by a later submission; dropped without touching the state.
    Stale,
}

#[derive(Debug, Default)]
pub struct PlaygroundState {
    pub inputs: TaskInputs,
    phase: RequestPhase,
    last_seq: RequestSeq,
    scroll_pending: bool,
}

impl PlaygroundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Loading { .. })
    }

    pub fn active_task(&self) -> Option<TaskKind> {
        self.phase.task()
    }

    /// Starts a new request for `task`. Any previous result or error is
    /// discarded immediately and earlier in-flight requests become stale.
    pub fn submit(&mut self, task: TaskKind) -> Submission {
        self.last_seq = self.last_seq.next();
        let seq = self.last_seq;
        self.phase = RequestPhase::Loading { task, seq };
        self.scroll_pending = false;

        Submission {
            seq,
            request: self.inputs.build_request(task),
        }
    }

    pub fn apply_completion(
        &mut self,
        seq: RequestSeq,
        outcome: Result<TaskOutput, String>,
    ) -> CompletionDisposition {
        let task = match &self.phase {
            RequestPhase::Loading { task, seq: current } if *current == seq => *task,
            _ => {
                tracing::debug!(
                    seq = seq.0,
                    latest = self.last_seq.0,
                    "discarding stale inference completion"
                );
                return CompletionDisposition::Stale;
            }
        };

        self.phase = match outcome {
            Ok(output) if output.kind() == task => {
                tracing::info!(task = %task, seq = seq.0, "inference request completed");
                self.scroll_pending = true;
                RequestPhase::Success { task, output }
            }
            Ok(output) => {
                let message = format!(
                    "unexpected {} response for a {} request",
                    output.kind(),
                    task
                );
                tracing::error!(task = %task, seq = seq.0, "{message}");
                RequestPhase::Failed { task, message }
            }
            Err(message) => {
                tracing::error!(task = %task, seq = seq.0, "inference request failed: {message}");
                RequestPhase::Failed { task, message }
            }
        };
        CompletionDisposition::Applied
    }

    /// Returns true once after each successful completion.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
