//! Reducer-like state transitions: widgets report `UiAction`s, the backend
//! reports `UiEvent`s, and both are folded into one `AppModel`. Actions return
//! the backend commands they require as effects.

use client_core::{AuthState, CredentialGate, LoginOutcome, ViewState};
use shared::domain::{Record, SortColumn};
use tracing::{debug, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::media::PreviewImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    NotRequested,
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AvatarState {
    #[default]
    NotRequested,
    Pending,
    Ready(PreviewImage),
    Unavailable,
}

#[derive(Debug, Default)]
pub struct DataViewModel {
    pub records: Vec<Record>,
    pub view: ViewState,
    pub load: LoadStatus,
    pub avatar: AvatarState,
}

impl DataViewModel {
    pub fn rows(&self) -> Vec<&Record> {
        self.view.project(&self.records)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    UsernameEdited(String),
    PasswordEdited(String),
    SubmitLogin,
    /// Emitted after every frame that drew the data view.
    DataViewRendered,
    SearchEdited(String),
    ClearFilter,
    SortBy(SortColumn),
    ToggleView,
    DismissBanner,
}

#[derive(Debug, Default)]
pub struct AppModel {
    pub auth: AuthState,
    pub gate: CredentialGate,
    /// Exists exactly when `auth` is Authenticated.
    pub data_view: Option<DataViewModel>,
    pub status_banner: Option<StatusBanner>,
}

impl AppModel {
    pub fn apply(&mut self, action: UiAction) -> Vec<BackendCommand> {
        match action {
            UiAction::UsernameEdited(username) => self.gate.username = username,
            UiAction::PasswordEdited(password) => self.gate.password = password,
            UiAction::SubmitLogin => self.submit_login(),
            UiAction::DataViewRendered => return self.after_data_view_render(),
            UiAction::SearchEdited(query) => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.view.set_search_query(query);
                }
            }
            UiAction::ClearFilter => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.view.clear_search();
                }
            }
            UiAction::SortBy(column) => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.view.toggle_sort(column);
                    debug!(
                        column = %column,
                        order = ?data_view.view.sort_order(),
                        "sort changed"
                    );
                }
            }
            UiAction::ToggleView => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.view.toggle_view();
                }
            }
            UiAction::DismissBanner => self.status_banner = None,
        }
        Vec::new()
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::RecordsLoaded(records) => {
                if let Some(data_view) = self.data_view.as_mut() {
                    info!(count = records.len(), "working record set replaced");
                    data_view.records = records;
                    data_view.load = LoadStatus::Loaded;
                }
            }
            UiEvent::AvatarLoaded(image) => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.avatar = AvatarState::Ready(image);
                }
            }
            UiEvent::Error(err) => {
                debug!(
                    context = ?err.context(),
                    message = err.message(),
                    "backend reported an error"
                );
                self.apply_error(err);
            }
        }
    }

    fn apply_error(&mut self, err: UiError) {
        match err.context() {
            // The working set stays as it was; there is no retry.
            UiErrorContext::LoadRecords => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.load = LoadStatus::Failed;
                }
            }
            UiErrorContext::Avatar => {
                if let Some(data_view) = self.data_view.as_mut() {
                    data_view.avatar = AvatarState::Unavailable;
                }
            }
            UiErrorContext::BackendStartup => {}
        }

        if err.is_user_visible() {
            self.status_banner = Some(StatusBanner {
                message: err.message().to_string(),
            });
        }
    }

    fn submit_login(&mut self) {
        if self.auth.is_authenticated() {
            return;
        }
        match self.gate.submit() {
            LoginOutcome::Accepted => {
                if self.auth.authenticate() {
                    info!("login accepted; showing data view");
                    self.data_view = Some(DataViewModel::default());
                }
            }
            LoginOutcome::Rejected => debug!("login rejected"),
        }
    }

    fn after_data_view_render(&mut self) -> Vec<BackendCommand> {
        let Some(data_view) = self.data_view.as_mut() else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        if data_view.load == LoadStatus::NotRequested {
            data_view.load = LoadStatus::Pending;
            commands.push(BackendCommand::LoadRecords);
        }
        if data_view.view.is_card_view() && data_view.avatar == AvatarState::NotRequested {
            data_view.avatar = AvatarState::Pending;
            commands.push(BackendCommand::FetchAvatar);
        }
        commands
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
