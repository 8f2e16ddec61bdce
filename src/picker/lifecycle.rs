//! Coarse lifecycle state for the asset picker dialog.

use bevy::prelude::*;

/// What the picker dialog body currently shows.
///
/// The error message travels inside the `Error` variant, so a message can
/// only exist while the picker is actually in the error state. An empty
/// message is valid and means "no detail available" — the error placeholder
/// then shows only its generic title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Resource holding the picker's coarse state.
///
/// Written only by the orchestrator and the upload tracker; everything else
/// reads it to decide what to render.
#[derive(Resource, Debug, Default)]
pub struct PickerLifecycle {
    status: PickerStatus,
}

impl PickerLifecycle {
    pub fn status(&self) -> &PickerStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == PickerStatus::Loading
    }

    pub fn has_error(&self) -> bool {
        matches!(self.status, PickerStatus::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            PickerStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Enter the loading state. Idempotent while uploads overlap; starting a
    /// new upload batch also replaces a sticky error from an earlier batch.
    pub fn set_loading(&mut self) {
        self.status = PickerStatus::Loading;
    }

    pub fn set_error(&mut self, message: String) {
        self.status = PickerStatus::Error(message);
    }

    /// Back to idle. Used by "back" navigation and by the tracker when an
    /// upload batch drains without failures.
    pub fn reset(&mut self) {
        self.status = PickerStatus::Idle;
    }
}
