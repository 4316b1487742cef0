mod backend_bridge;
mod config;
mod controller;
mod media;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime::{self, BackendEndpoints};
use crate::config::StartupConfig;
use crate::controller::events::UiEvent;
use crate::ui::RecordsDeskApp;

const APP_TITLE: &str = "Records Desk";

fn main() -> anyhow::Result<()> {
    let config = StartupConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.validate().context("invalid startup configuration")?;
    tracing::info!(records_url = %config.records_url, "starting records desk");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let _worker = runtime::launch(
        BackendEndpoints {
            records_url: config.records_url.clone(),
            avatar_url: config.avatar_url.clone(),
        },
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(RecordsDeskApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
