//! Backend commands queued from UI to backend worker.

use shared::{domain::RequestSeq, protocol::TaskRequest};

pub enum BackendCommand {
    Submit {
        seq: RequestSeq,
        request: TaskRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Submit { request, .. } => request.kind().api_path(),
        }
    }
}
