//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::InferenceHandle;
use crossbeam_channel::{Receiver, Sender};
use shared::{domain::RequestSeq, protocol::TaskRequest};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. It lives until every command sender is dropped.
pub fn launch(
    client: Arc<dyn InferenceHandle>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Backend worker ready ({})",
            client.base_url()
        )));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Submit { seq, request } => {
                    tracing::info!(task = %request.kind(), seq = seq.0, "backend: submit");
                    let client = Arc::clone(&client);
                    let ui_tx = ui_tx.clone();
                    // Each request runs on its own task; nothing cancels earlier ones.
                    runtime.spawn(async move {
                        let event = run_submission(client.as_ref(), seq, request).await;
                        // Completions wait for room in the queue so Loading always ends.
                        let delivered =
                            tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok()).await;
                        if !matches!(delivered, Ok(true)) {
                            tracing::warn!(
                                seq = seq.0,
                                "ui event queue closed; dropping completion"
                            );
                        }
                    });
                }
            }
        }

        tracing::info!("backend worker shutting down");
        runtime.shutdown_background();
    })
}

pub async fn run_submission(
    client: &dyn InferenceHandle,
    seq: RequestSeq,
    request: TaskRequest,
) -> UiEvent {
    let task = request.kind();
    let outcome = client.submit(request).await.map_err(|err| {
        tracing::warn!(task = %task, seq = seq.0, "backend: request failed: {err}");
        err.to_string()
    });
    UiEvent::TaskFinished { seq, outcome }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
