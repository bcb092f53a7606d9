use std::fmt;

/// Which inference task a request or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Sentiment,
    ZeroShot,
    TextGeneration,
}

impl TaskKind {
    /// Path segment under `/api/` on the inference server.
    pub fn api_path(self) -> &'static str {
        match self {
            TaskKind::Sentiment => "sentiment",
            TaskKind::ZeroShot => "zero_shot",
            TaskKind::TextGeneration => "text_generation",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TaskKind::Sentiment => "Sentiment analysis",
            TaskKind::ZeroShot => "Zero-shot classification",
            TaskKind::TextGeneration => "Text generation",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_path())
    }
}

/// Per-submission counter. Only the completion carrying the latest value is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

impl RequestSeq {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
