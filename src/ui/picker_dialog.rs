//! The asset picker dialog window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::AppConfig;
use crate::picker::{
    ActivateTab, ConfirmSelection, DismissPickerStatus, PickerLifecycle, RefreshUserUploads,
    SelectedAsset, StartFileBrowse, TabContent, TabPane,
};
use crate::style::PickerWindow;

use super::content;
use super::placeholders;

/// Renders the picker dialog: tab bar, disclaimer row, body (tab content or
/// a lifecycle placeholder) and the confirm/cancel footer.
#[allow(clippy::too_many_arguments)]
pub fn asset_picker_ui(
    mut contexts: EguiContexts,
    mut window: ResMut<PickerWindow>,
    mut pane: ResMut<TabPane>,
    lifecycle: Res<PickerLifecycle>,
    mut selection: ResMut<SelectedAsset>,
    config: Res<AppConfig>,
    mut activate_events: MessageWriter<ActivateTab>,
    mut browse_events: MessageWriter<StartFileBrowse>,
    mut refresh_events: MessageWriter<RefreshUserUploads>,
    mut confirm_events: MessageWriter<ConfirmSelection>,
    mut dismiss_events: MessageWriter<DismissPickerStatus>,
) -> Result {
    if !window.is_open {
        return Ok(());
    }

    let mut should_close = false;

    egui::Window::new("Select a marker image")
        .collapsible(false)
        .resizable(true)
        .default_width(540.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            // Tab bar
            ui.horizontal(|ui| {
                for tab in crate::picker::PickerTab::all() {
                    let active = *tab == pane.active();
                    if ui.selectable_label(active, tab.label()).clicked() {
                        activate_events.write(ActivateTab { tab: *tab });
                    }
                }
            });
            ui.separator();

            if lifecycle.is_loading() {
                if placeholders::render_loading(ui) {
                    dismiss_events.write(DismissPickerStatus);
                }
            } else if let Some(message) = lifecycle.error_message() {
                if placeholders::render_error(ui, message) {
                    dismiss_events.write(DismissPickerStatus);
                }
            } else {
                // Disclaimer row, hidden for tabs without one
                if let Some(disclaimer) = pane.disclaimer() {
                    ui.label(egui::RichText::new(disclaimer).weak().small());
                    ui.add_space(4.0);
                }

                match pane.active_content_mut() {
                    TabContent::Icons(state) => {
                        content::render_icon_grid(ui, state, &config, &mut selection);
                    }
                    TabContent::Uploads(state) => {
                        content::render_user_uploads(
                            ui,
                            state,
                            &mut selection,
                            &mut refresh_events,
                            &mut activate_events,
                            &mut browse_events,
                        );
                    }
                    TabContent::UploadForm(state) => {
                        content::render_upload_form(ui, state, &mut browse_events);
                    }
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!selection.is_empty(), egui::Button::new("Set image"))
                    .clicked()
                {
                    confirm_events.write(ConfirmSelection);
                }
                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    if should_close {
        window.is_open = false;
    }

    Ok(())
}
