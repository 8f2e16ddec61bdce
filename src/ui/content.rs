//! Renderers for the three kinds of tab content.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::config::AppConfig;
use crate::constants::ICON_GRID_COLUMNS;
use crate::picker::{
    ActivateTab, IconGridState, PickerTab, RefreshUserUploads, SelectedAsset, StartFileBrowse,
    UploadFormState, UserUploadsState,
};
use crate::theme;

/// Scrollable grid over one icon catalog. Clicking an icon makes it the
/// current selection.
pub fn render_icon_grid(
    ui: &mut egui::Ui,
    state: &IconGridState,
    config: &AppConfig,
    selection: &mut SelectedAsset,
) {
    let catalog = state.catalog;

    ui.label(egui::RichText::new(catalog.title).strong());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .max_height(280.0)
        .show(ui, |ui| {
            egui::Grid::new(catalog.folder)
                .num_columns(ICON_GRID_COLUMNS)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for (i, icon) in catalog.icons.iter().enumerate() {
                        let url = catalog.icon_url(&config.data.icons_base_url, icon);
                        let selected = selection.url == url;
                        if ui.selectable_label(selected, *icon).clicked() {
                            selection.set(url, catalog.kind.to_string());
                        }
                        if (i + 1) % ICON_GRID_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

/// Listing of the user's uploaded assets, with select, open-in-browser and a
/// shortcut into the upload flow.
pub fn render_user_uploads(
    ui: &mut egui::Ui,
    state: &mut UserUploadsState,
    selection: &mut SelectedAsset,
    refresh_events: &mut MessageWriter<RefreshUserUploads>,
    activate_events: &mut MessageWriter<ActivateTab>,
    browse_events: &mut MessageWriter<StartFileBrowse>,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Your uploads").strong());
        if ui
            .add_enabled(!state.fetching, egui::Button::new("Refresh"))
            .clicked()
        {
            refresh_events.write(RefreshUserUploads);
        }
        if ui.button("Upload a file…").clicked() {
            activate_events.write(ActivateTab {
                tab: PickerTab::UploadFile,
            });
            browse_events.write(StartFileBrowse);
        }
    });
    ui.add_space(4.0);

    if state.fetching {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Fetching your uploads…");
        });
        return;
    }

    if let Some(error) = &state.fetch_error {
        ui.colored_label(theme::ERROR_TEXT, error.as_str());
        return;
    }

    if state.assets.is_empty() {
        ui.label(egui::RichText::new("No uploads yet.").weak().italics());
        return;
    }

    egui::ScrollArea::vertical()
        .max_height(260.0)
        .show(ui, |ui| {
            let mut picked = None;
            let mut open_url = None;

            for asset in &state.assets {
                let name = asset
                    .public_url
                    .rsplit('/')
                    .next()
                    .unwrap_or(asset.public_url.as_str());
                let selected = selection.url == asset.public_url;

                ui.horizontal(|ui| {
                    if ui.selectable_label(selected, name).clicked() {
                        picked = Some((asset.public_url.clone(), asset.kind.clone()));
                    }
                    if ui.small_button("Open").clicked() {
                        open_url = Some(asset.public_url.clone());
                    }
                });
            }

            if let Some((url, kind)) = picked {
                selection.set(url, kind);
            }
            if let Some(url) = open_url
                && let Err(e) = open::that(&url)
            {
                warn!("Failed to open {}: {}", url, e);
            }
        });
}

/// The upload form: browse for files, show the in-flight batch and the files
/// rejected by validation.
pub fn render_upload_form(
    ui: &mut egui::Ui,
    state: &mut UploadFormState,
    browse_events: &mut MessageWriter<StartFileBrowse>,
) {
    ui.label("Upload images to use as markers.");
    ui.label(
        egui::RichText::new("PNG, JPG, WEBP, GIF or BMP up to 5 MB. Files upload immediately.")
            .weak()
            .small(),
    );
    ui.add_space(6.0);

    if ui
        .add_enabled(
            state.pending_browse.is_none(),
            egui::Button::new("Browse files…"),
        )
        .clicked()
    {
        browse_events.write(StartFileBrowse);
    }

    if !state.picked.is_empty() {
        ui.separator();
        ui.label(format!("Uploading {} file(s):", state.picked.len()));
        for file in &state.picked {
            ui.label(
                egui::RichText::new(format!(
                    "  {} ({}x{})",
                    file.file_name(),
                    file.width,
                    file.height
                ))
                .weak(),
            );
        }
    }

    if !state.invalid.is_empty() {
        ui.separator();
        ui.colored_label(
            theme::INVALID_FILE_TEXT,
            format!("Skipped ({}):", state.invalid.len()),
        );
        for (path, reason) in &state.invalid {
            if let Some(name) = path.file_name() {
                ui.colored_label(
                    theme::INVALID_FILE_TEXT,
                    format!("  {} - {}", name.to_string_lossy(), reason),
                );
            }
        }
    }
}
