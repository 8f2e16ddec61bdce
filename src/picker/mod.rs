//! Asset picker orchestration.
//!
//! The picker coordinates tabbed asset sources, tracks overlapping uploads,
//! and owns the one selection the host style panel eventually receives.
//!
//! ## Module Structure
//!
//! - [`selection`] - the currently chosen asset, shared with tab content
//! - [`lifecycle`] - idle/loading/error state driving what the dialog shows
//! - [`tracker`] - in-flight upload counting
//! - [`tabs`] - tab registry, disclaimers, lazy per-tab content cache
//! - [`catalog`] - the built-in icon sets
//! - [`orchestrator`] - the message handlers and task-polling systems

pub mod catalog;
mod lifecycle;
mod orchestrator;
mod selection;
mod tabs;
mod tracker;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

use crate::storage::PickedFile;

pub use lifecycle::{PickerLifecycle, PickerStatus};
pub use selection::SelectedAsset;
pub use tabs::{IconGridState, PickerTab, TabContent, TabPane, UploadFormState, UserUploadsState};
pub use tracker::UploadTracker;

/// Open the picker dialog, seeded with the style's current image.
#[derive(Message)]
pub struct OpenAssetPicker {
    pub initial_url: String,
    pub kind: String,
}

/// The user clicked a tab header.
#[derive(Message)]
pub struct ActivateTab {
    pub tab: PickerTab,
}

/// Open the native multi-file dialog for the upload flow.
#[derive(Message)]
pub struct StartFileBrowse;

/// Upload a batch of validated files, one independent operation each.
#[derive(Message)]
pub struct RequestUpload {
    pub files: Vec<PickedFile>,
}

/// Commit the current selection to the host and dismiss the dialog.
#[derive(Message)]
pub struct ConfirmSelection;

/// Back navigation from the loading/error placeholder. Resets the lifecycle
/// only; in-flight uploads are not cancelled.
#[derive(Message)]
pub struct DismissPickerStatus;

/// An upload batch drained without failures.
#[derive(Message)]
pub struct AllUploadsComplete;

/// Re-fetch the "your uploads" listing.
#[derive(Message)]
pub struct RefreshUserUploads;

/// Files picked in the native dialog, handed back by the browse task.
#[derive(Message)]
pub struct FilesPicked {
    pub paths: Vec<PathBuf>,
}

pub struct AssetPickerPlugin;

impl Plugin for AssetPickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedAsset>()
            .init_resource::<PickerLifecycle>()
            .init_resource::<UploadTracker>()
            .init_resource::<TabPane>()
            .add_message::<OpenAssetPicker>()
            .add_message::<ActivateTab>()
            .add_message::<StartFileBrowse>()
            .add_message::<FilesPicked>()
            .add_message::<RequestUpload>()
            .add_message::<ConfirmSelection>()
            .add_message::<DismissPickerStatus>()
            .add_message::<AllUploadsComplete>()
            .add_message::<RefreshUserUploads>()
            .add_systems(
                Update,
                (
                    orchestrator::handle_open_picker.run_if(on_message::<OpenAssetPicker>),
                    orchestrator::handle_tab_activation.run_if(on_message::<ActivateTab>),
                    orchestrator::handle_file_browse.run_if(on_message::<StartFileBrowse>),
                    orchestrator::poll_file_browse,
                    orchestrator::handle_files_picked.run_if(on_message::<FilesPicked>),
                    orchestrator::handle_upload_requests.run_if(on_message::<RequestUpload>),
                    orchestrator::poll_upload_tasks,
                    orchestrator::handle_uploads_complete.run_if(on_message::<AllUploadsComplete>),
                    orchestrator::handle_refresh_uploads.run_if(on_message::<RefreshUserUploads>),
                    orchestrator::poll_uploads_fetch,
                    orchestrator::handle_confirm.run_if(on_message::<ConfirmSelection>),
                    orchestrator::handle_dismiss_status.run_if(on_message::<DismissPickerStatus>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    orchestrator::log_lifecycle_transitions
                        .run_if(resource_changed::<PickerLifecycle>),
                    orchestrator::log_selection_changes.run_if(resource_changed::<SelectedAsset>),
                ),
            );
    }
}
