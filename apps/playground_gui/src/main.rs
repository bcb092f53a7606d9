use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::InferenceClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, Overrides};
use crate::controller::events::UiEvent;
use crate::ui::PlaygroundApp;

#[derive(Parser, Debug)]
#[command(
    name = "playground_gui",
    about = "Desktop front-end for a remote transformer inference API"
)]
struct Args {
    /// Base URL of the inference server, e.g. http://127.0.0.1:8000
    #[arg(long)]
    base_url: Option<String>,
    /// TOML file with `base_url` and `log_filter` keys
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            log_filter: self.log_filter.clone(),
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.overrides()).context("failed to load settings")?;
    init_tracing(&settings.log_filter);
    tracing::info!(base_url = %settings.base_url, "starting transformer playground");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let client = Arc::new(InferenceClient::new(settings.base_url.clone()));
    backend_bridge::runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Transformer Playground")
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    let base_url = settings.base_url;
    eframe::run_native(
        "Transformer Playground",
        options,
        Box::new(move |_cc| Ok(Box::new(PlaygroundApp::new(base_url, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("failed to run the playground window: {err}"))
}
