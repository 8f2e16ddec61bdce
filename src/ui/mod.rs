//! egui systems for the editor surface.
//!
//! - [`style_panel`] - side panel with the style name (inline editor) and
//!   the marker image property
//! - [`picker_dialog`] - the asset picker dialog window
//! - [`content`] - per-tab content renderers
//! - [`placeholders`] - loading/error placeholders
//! - [`inline_editor`] - double-click-to-edit state machine

mod content;
pub mod inline_editor;
mod picker_dialog;
mod placeholders;
mod style_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<style_panel::StylePanelState>()
            .add_systems(
                EguiPrimaryContextPass,
                // Side panel first so the dialog centers over the remainder
                (style_panel::style_panel_ui, picker_dialog::asset_picker_ui).chain(),
            );
    }
}
