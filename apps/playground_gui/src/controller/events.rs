//! Backend-to-UI events and error modeling for the playground controller.

use shared::{domain::RequestSeq, protocol::TaskOutput};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    TaskFinished {
        seq: RequestSeq,
        outcome: Result<TaskOutput, String>,
    },
}

/// How a submission was triggered. Both paths submit identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    Button,
    EnterKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Submission,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "Backend startup",
            UiErrorContext::Submission => "Submission",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_line(&self) -> String {
        format!("{} error: {}", self.context.label(), self.message)
    }
}
