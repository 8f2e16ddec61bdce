//! Side panel showing the map style being edited.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::INLINE_EDIT_CLICK_TIMEOUT;
use crate::picker::OpenAssetPicker;
use crate::style::{RenameStyle, StyleProperty};

use super::inline_editor::{ClickAction, InlineEditor};

/// State for the style panel.
#[derive(Resource)]
pub struct StylePanelState {
    pub name_editor: InlineEditor,
    /// Whether the name row is highlighted (toggled by a single click).
    pub name_row_selected: bool,
}

impl Default for StylePanelState {
    fn default() -> Self {
        Self {
            name_editor: InlineEditor::new(INLINE_EDIT_CLICK_TIMEOUT),
            name_row_selected: false,
        }
    }
}

pub fn style_panel_ui(
    mut contexts: EguiContexts,
    mut panel: ResMut<StylePanelState>,
    style: Res<StyleProperty>,
    time: Res<Time>,
    mut rename_events: MessageWriter<RenameStyle>,
    mut open_events: MessageWriter<OpenAssetPicker>,
) -> Result {
    let now = time.elapsed_secs_f64();

    // A held click whose double-click window expired becomes a single click.
    if panel.name_editor.poll_single_click(now) {
        panel.name_row_selected = !panel.name_row_selected;
    }

    egui::SidePanel::left("style_properties")
        .default_width(280.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(8.0);

            if panel.name_editor.is_editing() {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut panel.name_editor.buffer)
                        .hint_text("Style name"),
                );
                if panel.name_editor.take_focus_request() {
                    response.request_focus();
                }

                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));

                if escape {
                    panel.name_editor.cancel();
                } else if enter {
                    if let Some(name) = panel.name_editor.commit() {
                        rename_events.write(RenameStyle { name });
                    }
                } else if response.lost_focus() {
                    panel.name_editor.cancel();
                }
            } else {
                let mut title = egui::RichText::new(style.name.as_str()).heading();
                if panel.name_row_selected {
                    title = title.background_color(ui.visuals().selection.bg_fill);
                }

                let response = ui
                    .add(egui::Label::new(title).sense(egui::Sense::click()))
                    .on_hover_text("Double-click to rename");
                if response.clicked()
                    && panel.name_editor.register_click(now) == ClickAction::BeginEdit
                {
                    let current = style.name.clone();
                    panel.name_editor.begin_edit(&current);
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Marker image").strong());
                ui.add_space(4.0);

                if style.image.is_empty() {
                    ui.label(egui::RichText::new("No image set").weak().italics());
                } else {
                    ui.label(egui::RichText::new(style.image.as_str()).weak().small());
                    if !style.kind.is_empty() {
                        ui.label(
                            egui::RichText::new(format!("kind: {}", style.kind))
                                .weak()
                                .small(),
                        );
                    }
                }

                ui.add_space(4.0);
                if ui.button("Choose image…").clicked() {
                    open_events.write(OpenAssetPicker {
                        initial_url: style.image.clone(),
                        kind: style.kind.clone(),
                    });
                }
            });
        });

    Ok(())
}
