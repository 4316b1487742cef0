//! One-shot record loading with explicit cancellation.
//!
//! A load runs as a tokio task. Its result is handed to the `deliver`
//! callback unless the load was cancelled first; after cancellation nothing is
//! delivered, even if the request completes later.

use std::sync::Arc;

use shared::domain::Record;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, info};

use crate::{error::FetchError, records::RecordSource};

pub type LoadResult = Result<Vec<Record>, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCompletion {
    Delivered,
    Cancelled,
}

/// Handle to an in-flight load. Dropping it cancels the load.
pub struct LoadHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<LoadCompletion>,
}

impl LoadHandle {
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
    }

    /// Waits for the task and reports whether its result reached `deliver`.
    pub async fn completion(mut self) -> LoadCompletion {
        let task = &mut self.task;
        match task.await {
            Ok(completion) => completion,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => LoadCompletion::Cancelled,
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Must be called from within a tokio runtime.
pub fn spawn_load<F>(source: Arc<dyn RecordSource>, deliver: F) -> LoadHandle
where
    F: FnOnce(LoadResult) + Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        let result = tokio::select! {
            biased;
            _ = &mut cancel_rx => None,
            result = source.fetch_records() => Some(result),
        };

        match result {
            Some(result) => {
                match &result {
                    Ok(records) => info!(count = records.len(), "record load finished"),
                    Err(err) => debug!(error = %err, "record load failed"),
                }
                deliver(result);
                LoadCompletion::Delivered
            }
            None => {
                info!("record load cancelled before completion");
                LoadCompletion::Cancelled
            }
        }
    });

    LoadHandle {
        cancel_tx: Some(cancel_tx),
        task,
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
