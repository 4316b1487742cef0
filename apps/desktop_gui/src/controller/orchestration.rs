//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::StatusBanner;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status_banner: &mut Option<StatusBanner>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            *status_banner = Some(StatusBanner {
                message: "UI command queue is full; please retry".to_string(),
            });
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            // A startup failure already explains why the worker is gone.
            if status_banner.is_none() {
                *status_banner = Some(StatusBanner {
                    message: "Backend worker disconnected (possible startup/runtime failure); restart the app"
                        .to_string(),
                });
            }
        }
    }
}
