//! Backend-to-UI events and error modeling for the desktop GUI controller.

use client_core::FetchError;
use shared::domain::Record;

use crate::media::PreviewImage;

pub enum UiEvent {
    RecordsLoaded(Vec<Record>),
    AvatarLoaded(PreviewImage),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadRecords,
    Avatar,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn from_fetch_error(context: UiErrorContext, err: &FetchError) -> Self {
        Self::new(context, err.to_string())
    }

    /// Only a dead backend reaches the screen; load and avatar failures are
    /// logged and otherwise silent.
    pub fn is_user_visible(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
