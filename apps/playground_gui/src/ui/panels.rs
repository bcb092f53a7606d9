//! Input panels and the shared results region.

use eframe::egui;
use shared::domain::TaskKind;

use crate::controller::{
    events::SubmitTrigger,
    reducer::TaskInputs,
    view::{ResultPane, ResultView},
};

const SUBMIT_BUTTON_SIZE: [f32; 2] = [180.0, 32.0];

pub fn show_sentiment_panel(ui: &mut egui::Ui, inputs: &mut TaskInputs) -> Option<SubmitTrigger> {
    panel_card(ui, "Sentiment Analysis", |ui| {
        let text = text_area(
            ui,
            &mut inputs.sentiment_text,
            "Enter text for sentiment analysis",
        );
        let enter = enter_submitted(ui, &text, true);
        submit_row(ui, "Analyze Sentiment", enter)
    })
}

pub fn show_zero_shot_panel(ui: &mut egui::Ui, inputs: &mut TaskInputs) -> Option<SubmitTrigger> {
    panel_card(ui, "Zero-shot Classification", |ui| {
        let text = text_area(
            ui,
            &mut inputs.zero_shot_text,
            "Enter text for zero-shot classification",
        );
        let mut enter = enter_submitted(ui, &text, true);
        ui.add_space(4.0);
        let labels = text_line(
            ui,
            &mut inputs.zero_shot_labels,
            "Enter labels (comma-separated)",
        );
        enter |= enter_submitted(ui, &labels, false);
        submit_row(ui, "Classify", enter)
    })
}

pub fn show_text_generation_panel(
    ui: &mut egui::Ui,
    inputs: &mut TaskInputs,
) -> Option<SubmitTrigger> {
    panel_card(ui, "Text Generation", |ui| {
        let prompt = text_line(
            ui,
            &mut inputs.generation_prompt,
            "Enter prompt for text generation",
        );
        let enter = enter_submitted(ui, &prompt, false);
        submit_row(ui, "Generate Text", enter)
    })
}

pub fn show_loading_indicator(ui: &mut egui::Ui, task: TaskKind) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.weak(format!("{}: waiting for the inference server...", task.display_name()));
    });
}

/// Draws the results region and scrolls it into view when asked to.
pub fn show_results(ui: &mut egui::Ui, pane: &ResultPane, scroll_into_view: bool) {
    let response = egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            match pane {
                ResultPane::Empty | ResultPane::Loading => {}
                ResultPane::Result(view) => show_result_view(ui, view),
                ResultPane::Error { title, message } => show_error(ui, title, message),
            }
        })
        .response;

    if scroll_into_view {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
}

fn show_result_view(ui: &mut egui::Ui, view: &ResultView) {
    ui.heading(view.title);
    ui.add_space(6.0);
    for row in &view.rows {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(format!("{}:", row.label)).strong());
            ui.label(row.value.as_str());
        });
    }
}

fn show_error(ui: &mut egui::Ui, title: &str, message: &str) {
    let error_color = ui.visuals().error_fg_color;
    egui::Frame::NONE
        .fill(error_color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, error_color))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.colored_label(error_color, egui::RichText::new(title).strong());
            ui.label(message);
        });
}

fn panel_card(
    ui: &mut egui::Ui,
    title: &str,
    add: impl FnOnce(&mut egui::Ui) -> Option<SubmitTrigger>,
) -> Option<SubmitTrigger> {
    let trigger = egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(6.0);
            add(ui)
        })
        .inner;
    ui.add_space(10.0);
    trigger
}

fn text_area(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    // Shift+Enter inserts a newline; plain Enter is left for submission.
    let newline = egui::KeyboardShortcut::new(egui::Modifiers::SHIFT, egui::Key::Enter);
    ui.add(
        egui::TextEdit::multiline(text)
            .hint_text(hint)
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .return_key(newline),
    )
}

fn text_line(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

/// Any Enter submits from a single-line field; multi-line areas keep Shift+Enter for newlines.
fn enter_submitted(ui: &egui::Ui, response: &egui::Response, multiline: bool) -> bool {
    (response.has_focus() || response.lost_focus())
        && ui.input(|i| i.key_pressed(egui::Key::Enter) && !(multiline && i.modifiers.shift))
}

fn submit_row(ui: &mut egui::Ui, label: &str, enter_pressed: bool) -> Option<SubmitTrigger> {
    ui.add_space(6.0);
    let button = egui::Button::new(egui::RichText::new(label).strong())
        .min_size(SUBMIT_BUTTON_SIZE.into());
    let clicked = ui.add(button).clicked();

    if clicked {
        Some(SubmitTrigger::Button)
    } else if enter_pressed {
        Some(SubmitTrigger::EnterKey)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
