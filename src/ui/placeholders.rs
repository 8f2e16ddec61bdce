//! Loading and error placeholders shown in place of the tab content.

use bevy_egui::egui;

use crate::theme;

/// Loading placeholder shown while any upload is outstanding. Returns true
/// when the back button was clicked.
pub fn render_loading(ui: &mut egui::Ui) -> bool {
    let mut back = false;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label("Uploading your image…");
        ui.label(
            egui::RichText::new("This can take a moment for large files.")
                .weak()
                .small(),
        );
        ui.add_space(12.0);
        if ui.button("Back").clicked() {
            back = true;
        }
        ui.add_space(32.0);
    });

    back
}

/// Error placeholder with a best-effort message. An empty message shows only
/// the generic title. Returns true when the back button was clicked.
pub fn render_error(ui: &mut egui::Ui, message: &str) -> bool {
    let mut back = false;

    let title = if message.is_empty() {
        "The file could not be uploaded"
    } else {
        message
    };

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.colored_label(theme::ERROR_TEXT, egui::RichText::new(title).strong());
        ui.label(
            egui::RichText::new("Check the file and try again, or pick a different image.")
                .weak(),
        );
        ui.add_space(12.0);
        if ui.button("Back").clicked() {
            back = true;
        }
        ui.add_space(32.0);
    });

    back
}
