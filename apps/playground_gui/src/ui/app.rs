use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::TaskKind;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{SubmitTrigger, UiError, UiErrorContext, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::PlaygroundState,
    view::ResultPane,
};
use crate::ui::panels;

pub struct PlaygroundApp {
    state: PlaygroundState,
    base_url: String,
    status: String,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl PlaygroundApp {
    pub fn new(
        base_url: impl Into<String>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            state: PlaygroundState::new(),
            base_url: base_url.into(),
            status: "Starting...".to_string(),
            cmd_tx,
            ui_rx,
        }
    }

    /// Button clicks and Enter presses both land here.
    pub fn submit(&mut self, task: TaskKind, trigger: SubmitTrigger) {
        let submission = self.state.submit(task);
        let seq = submission.seq;
        tracing::info!(task = %task, seq = seq.0, ?trigger, "submitting inference request");

        let cmd = BackendCommand::Submit {
            seq,
            request: submission.request,
        };
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.status =
                UiError::from_message(UiErrorContext::Submission, message.clone()).status_line();
            self.state.apply_completion(seq, Err(message));
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = err.context().label(), "{}", err.message());
                    self.status = err.status_line();
                }
                UiEvent::TaskFinished { seq, outcome } => {
                    self.state.apply_completion(seq, outcome);
                }
            }
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("playground_top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Transformer Playground");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(&self.base_url).monospace().weak());
                    ui.small("Server:");
                });
            });
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
            ui.add_space(4.0);
        });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        let mut pending = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let inputs = &mut self.state.inputs;
                    if let Some(trigger) = panels::show_sentiment_panel(ui, inputs) {
                        pending = Some((TaskKind::Sentiment, trigger));
                    }
                    if let Some(trigger) = panels::show_zero_shot_panel(ui, inputs) {
                        pending = Some((TaskKind::ZeroShot, trigger));
                    }
                    if let Some(trigger) = panels::show_text_generation_panel(ui, inputs) {
                        pending = Some((TaskKind::TextGeneration, trigger));
                    }

                    match self.state.active_task() {
                        Some(task) if self.state.is_loading() => {
                            panels::show_loading_indicator(ui, task);
                        }
                        _ => {}
                    }

                    let pane = ResultPane::from_state(&self.state);
                    let scroll = self.state.take_scroll_request();
                    panels::show_results(ui, &pane, scroll);
                });
        });

        if let Some((task, trigger)) = pending {
            self.submit(task, trigger);
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_top_bar(ctx);
        self.show_workspace(ctx);

        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
