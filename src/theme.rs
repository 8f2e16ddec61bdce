//! Centralized colors for the editor UI.
//!
//! Modify values here to change the application's color scheme.

use bevy_egui::egui;

/// Title text on the upload error placeholder
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(210, 90, 90);

/// Reasons shown next to files rejected by upload validation
pub const INVALID_FILE_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 100, 100);

/// Window clear color behind the panels
pub const CANVAS_CLEAR: bevy::prelude::Color = bevy::prelude::Color::srgb(0.13, 0.14, 0.16);
