//! Runtime bridge between the UI command queue and backend event intake.
//!
//! The worker thread owns a tokio runtime. Commands arrive over a bounded
//! channel and results go back as `UiEvent`s; the UI drains them each frame.

use std::{sync::Arc, thread};

use client_core::{fetch_bytes, spawn_load, HttpRecordSource, LoadHandle, RecordSource};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::media::{decode_avatar_image, PreviewImage};

#[derive(Debug, Clone)]
pub struct BackendEndpoints {
    pub records_url: String,
    pub avatar_url: String,
}

pub fn launch(
    endpoints: BackendEndpoints,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(endpoints, cmd_rx, ui_tx));
    })
}

async fn run_worker(
    endpoints: BackendEndpoints,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let http = HttpClient::new();
    let records = HttpRecordSource::with_client(http.clone(), endpoints.records_url.clone());
    info!(records_url = records.records_url(), "backend worker ready");
    let source: Arc<dyn RecordSource> = Arc::new(records);
    let mut records_load: Option<LoadHandle> = None;
    let mut avatar_task: Option<JoinHandle<()>> = None;

    // Blocking receive is fine here: block_on runs outside the worker pool.
    while let Ok(cmd) = cmd_rx.recv() {
        debug!(command = cmd.name(), "backend command received");
        match cmd {
            BackendCommand::LoadRecords => {
                if records_load.is_some() {
                    warn!("records were already requested; ignoring repeat load");
                    continue;
                }
                let ui_tx = ui_tx.clone();
                records_load = Some(spawn_load(source.clone(), move |result| {
                    let event = match result {
                        Ok(records) => UiEvent::RecordsLoaded(records),
                        Err(err) => {
                            error!(url = err.url(), error = %err, "error fetching records");
                            UiEvent::Error(UiError::from_fetch_error(
                                UiErrorContext::LoadRecords,
                                &err,
                            ))
                        }
                    };
                    let _ = ui_tx.try_send(event);
                }));
            }
            BackendCommand::FetchAvatar => {
                if avatar_task.is_some() {
                    continue;
                }
                let ui_tx = ui_tx.clone();
                let http = http.clone();
                let avatar_url = endpoints.avatar_url.clone();
                avatar_task = Some(tokio::spawn(async move {
                    let event = match fetch_avatar(&http, &avatar_url).await {
                        Ok(image) => UiEvent::AvatarLoaded(image),
                        Err(message) => {
                            warn!(url = %avatar_url, "avatar unavailable: {message}");
                            UiEvent::Error(UiError::new(UiErrorContext::Avatar, message))
                        }
                    };
                    let _ = ui_tx.try_send(event);
                }));
            }
            BackendCommand::Shutdown => break,
        }
    }

    if let Some(mut load) = records_load.take() {
        load.cancel();
    }
    if let Some(task) = avatar_task.take() {
        task.abort();
    }
    info!("backend worker stopped");
}

async fn fetch_avatar(http: &HttpClient, url: &str) -> Result<PreviewImage, String> {
    let bytes = fetch_bytes(http, url)
        .await
        .map_err(|err| err.to_string())?;
    tokio::task::spawn_blocking(move || decode_avatar_image(&bytes))
        .await
        .map_err(|err| format!("avatar decode task failed: {err}"))?
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
