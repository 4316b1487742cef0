use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{AppModel, AvatarState, LoadStatus, UiAction};
use crate::ui::{panels, theme};

/// Repaint cadence while backend work is outstanding, so results show up
/// without waiting for input.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RecordsDeskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    avatar_texture: Option<TextureHandle>,
    theme_applied: bool,
    login_focus_pending: bool,
}

impl RecordsDeskApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: AppModel::default(),
            avatar_texture: None,
            theme_applied: false,
            login_focus_pending: true,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply_event(event);
        }
    }

    fn dispatch(&mut self, action: UiAction) {
        for cmd in self.model.apply(action) {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.model.status_banner);
        }
    }

    fn upload_avatar_if_ready(&mut self, ctx: &egui::Context) {
        if self.avatar_texture.is_some() {
            return;
        }
        let Some(data_view) = self.model.data_view.as_ref() else {
            return;
        };
        if let AvatarState::Ready(image) = &data_view.avatar {
            self.avatar_texture = Some(ctx.load_texture(
                "card_avatar",
                image.to_color_image(),
                egui::TextureOptions::LINEAR,
            ));
        }
    }

    fn has_pending_backend_work(&self) -> bool {
        self.model.data_view.as_ref().is_some_and(|data_view| {
            data_view.load == LoadStatus::Pending || data_view.avatar == AvatarState::Pending
        })
    }
}

impl eframe::App for RecordsDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals());
            self.theme_applied = true;
        }

        self.process_ui_events();
        self.upload_avatar_if_ready(ctx);

        let actions = match self.model.data_view.as_ref() {
            None => {
                let focus = std::mem::take(&mut self.login_focus_pending);
                panels::login::show_login_screen(
                    ctx,
                    &self.model.gate,
                    self.model.status_banner.as_ref(),
                    focus,
                )
            }
            Some(data_view) => panels::records::show_data_view(
                ctx,
                data_view,
                self.avatar_texture.as_ref(),
                self.model.status_banner.as_ref(),
            ),
        };
        let showed_data_view = self.model.data_view.is_some();

        for action in actions {
            self.dispatch(action);
        }
        if showed_data_view {
            self.dispatch(UiAction::DataViewRendered);
        }
        // A successful login swaps screens; draw the data view right away.
        if !showed_data_view && self.model.data_view.is_some() {
            ctx.request_repaint();
        }

        if self.has_pending_backend_work() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}

impl Drop for RecordsDeskApp {
    fn drop(&mut self) {
        // Stops the worker and cancels any in-flight load.
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}
