//! Message handlers and task-polling systems for the asset picker.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;

use crate::config::AppConfig;
use crate::storage::{self, UploadOutcome};
use crate::style::PickerWindow;

use super::catalog::MARKER_KIND;
use super::lifecycle::PickerLifecycle;
use super::selection::SelectedAsset;
use super::tabs::{PickerTab, TabPane};
use super::tracker::UploadTracker;
use super::{
    ActivateTab, AllUploadsComplete, ConfirmSelection, DismissPickerStatus, FilesPicked,
    OpenAssetPicker, RefreshUserUploads, RequestUpload, StartFileBrowse,
};

/// One in-flight upload operation.
#[derive(Component)]
pub struct UploadTask(pub Task<UploadOutcome>);

/// The `{url, kind}` payload the host receives on confirm, or `None` while
/// nothing is selected. Confirming with an empty selection must be a no-op,
/// guarded here rather than merely disabled in the UI.
pub(crate) fn selection_commit(selection: &SelectedAsset) -> Option<(String, String)> {
    if selection.is_empty() {
        return None;
    }
    Some((selection.url.clone(), selection.kind.clone()))
}

/// Open the dialog with fresh picker state, seeded from the style's current
/// image. The upload tracker is deliberately left alone: uploads still in
/// flight from an earlier dialog keep their begin/end pairing.
pub fn handle_open_picker(
    mut events: MessageReader<OpenAssetPicker>,
    mut window: ResMut<PickerWindow>,
    mut selection: ResMut<SelectedAsset>,
    mut lifecycle: ResMut<PickerLifecycle>,
    mut pane: ResMut<TabPane>,
) {
    for event in events.read() {
        selection.set(event.initial_url.clone(), event.kind.clone());
        lifecycle.reset();
        *pane = TabPane::default();
        window.is_open = true;
    }
}

/// Tab switch: disclaimer swap, selection reset for the upload tab, lazy
/// content materialization. A first visit to "your uploads" also kicks off
/// the listing fetch.
pub fn handle_tab_activation(
    mut events: MessageReader<ActivateTab>,
    mut pane: ResMut<TabPane>,
    mut selection: ResMut<SelectedAsset>,
    mut refresh_events: MessageWriter<RefreshUserUploads>,
) {
    for event in events.read() {
        debug!("tab activated: {}", event.tab.name());
        pane.activate(event.tab, &mut selection);

        if event.tab == PickerTab::YourUploads
            && let Some(state) = pane.uploads_mut()
            && !state.loaded
            && state.pending_fetch.is_none()
        {
            refresh_events.write(RefreshUserUploads);
        }
    }
}

/// Open the native multi-file dialog on the task pool.
pub fn handle_file_browse(mut events: MessageReader<StartFileBrowse>, mut pane: ResMut<TabPane>) {
    for _ in events.read() {
        let form = match pane.materialize(PickerTab::UploadFile) {
            super::tabs::TabContent::UploadForm(form) => form,
            _ => continue,
        };
        if form.pending_browse.is_some() {
            continue;
        }

        let task_pool = AsyncComputeTaskPool::get();
        form.pending_browse = Some(task_pool.spawn(async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", storage::SUPPORTED_EXTENSIONS)
                .set_title("Select images to upload")
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        }));
    }
}

/// Poll the pending browse dialog and hand its result to validation.
pub fn poll_file_browse(mut pane: ResMut<TabPane>, mut picked_events: MessageWriter<FilesPicked>) {
    if let Some(form) = pane.upload_form_mut()
        && let Some(task) = form.pending_browse.as_mut()
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        form.pending_browse = None;
        if let Some(paths) = result
            && !paths.is_empty()
        {
            picked_events.write(FilesPicked { paths });
        }
    }
}

/// Validate picked files; valid ones become upload requests immediately,
/// rejected ones are listed in the form with the reason.
pub fn handle_files_picked(
    mut events: MessageReader<FilesPicked>,
    mut pane: ResMut<TabPane>,
    mut upload_events: MessageWriter<RequestUpload>,
) {
    for event in events.read() {
        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for path in &event.paths {
            match storage::validate_upload_file(path) {
                Ok(picked) => valid.push(picked),
                Err(reason) => {
                    warn!("rejected {}: {}", path.display(), reason);
                    invalid.push((path.clone(), reason));
                }
            }
        }

        if let Some(form) = pane.upload_form_mut() {
            form.picked = valid.clone();
            form.invalid = invalid;
        }

        if !valid.is_empty() {
            upload_events.write(RequestUpload { files: valid });
        }
    }
}

/// Fan a batch out into one independent upload task per file. Each task is
/// paired with exactly one `UploadTracker::end` when it completes.
pub fn handle_upload_requests(
    mut events: MessageReader<RequestUpload>,
    mut commands: Commands,
    mut tracker: ResMut<UploadTracker>,
    mut lifecycle: ResMut<PickerLifecycle>,
    config: Res<AppConfig>,
) {
    let task_pool = AsyncComputeTaskPool::get();

    for event in events.read() {
        for file in &event.files {
            tracker.begin(&mut lifecycle);

            let base_url = config.data.api_base_url.clone();
            let api_key = config.data.api_key.clone();
            let path = file.path.clone();

            info!("uploading {}", file.file_name());
            let task = task_pool.spawn(async move {
                storage::upload_asset(&base_url, api_key.as_deref(), &path, MARKER_KIND)
            });
            commands.spawn(UploadTask(task));
        }
    }
}

/// Drain finished upload tasks, in whatever order they complete. A success
/// makes the uploaded asset the current selection; the tracker decides when
/// the whole batch is done.
#[allow(clippy::too_many_arguments)]
pub fn poll_upload_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut UploadTask)>,
    mut tracker: ResMut<UploadTracker>,
    mut lifecycle: ResMut<PickerLifecycle>,
    mut selection: ResMut<SelectedAsset>,
    mut pane: ResMut<TabPane>,
    mut done_events: MessageWriter<AllUploadsComplete>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(outcome) = future::block_on(future::poll_once(&mut task.0)) {
            if outcome.success {
                if let Some(url) = &outcome.url {
                    selection.set(url.clone(), outcome.kind.clone());
                }
            } else {
                warn!(
                    "upload failed: {}",
                    outcome.error.as_deref().unwrap_or("(no detail)")
                );
            }

            let error_message = outcome.error.unwrap_or_default();
            if tracker.end(&mut lifecycle, outcome.success, error_message) {
                done_events.write(AllUploadsComplete);
            }
            debug!("{} upload(s) still outstanding", tracker.in_flight());

            commands.entity(entity).despawn();
        }
    }

    // The batch is over, success or not: clear the picked-file list so the
    // form is ready for the next one
    if tracker.in_flight() == 0
        && let Some(form) = pane.upload_form_mut()
        && !form.picked.is_empty()
    {
        form.picked.clear();
    }
}

/// A batch drained clean: show the freshly uploaded assets and clear the
/// form's picked-file list for the next batch.
pub fn handle_uploads_complete(
    mut events: MessageReader<AllUploadsComplete>,
    mut pane: ResMut<TabPane>,
    mut selection: ResMut<SelectedAsset>,
    mut refresh_events: MessageWriter<RefreshUserUploads>,
) {
    for _ in events.read() {
        info!("all uploads complete");
        pane.activate(PickerTab::YourUploads, &mut selection);
        refresh_events.write(RefreshUserUploads);
    }
}

/// Fetch the uploads listing on the task pool.
pub fn handle_refresh_uploads(
    mut events: MessageReader<RefreshUserUploads>,
    mut pane: ResMut<TabPane>,
    config: Res<AppConfig>,
) {
    for _ in events.read() {
        let state = match pane.materialize(PickerTab::YourUploads) {
            super::tabs::TabContent::Uploads(state) => state,
            _ => continue,
        };
        if state.pending_fetch.is_some() {
            continue;
        }

        state.fetching = true;
        state.fetch_error = None;

        let base_url = config.data.api_base_url.clone();
        let api_key = config.data.api_key.clone();

        let task_pool = AsyncComputeTaskPool::get();
        state.pending_fetch =
            Some(task_pool.spawn(async move { storage::list_assets(&base_url, api_key.as_deref()) }));
    }
}

/// Drain the pending listing fetch. Failures surface inside the tab, not in
/// the picker lifecycle.
pub fn poll_uploads_fetch(mut pane: ResMut<TabPane>) {
    if let Some(state) = pane.uploads_mut()
        && let Some(task) = state.pending_fetch.as_mut()
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        state.pending_fetch = None;
        state.fetching = false;
        state.loaded = true;

        match result {
            Ok(assets) => {
                debug!("fetched {} uploaded asset(s)", assets.len());
                state.assets = assets;
            }
            Err(e) => {
                warn!("failed to fetch uploads: {}", e);
                state.fetch_error = Some(e);
            }
        }
    }
}

/// Commit the selection to the host style and dismiss the dialog. A no-op
/// while nothing is selected.
pub fn handle_confirm(
    mut events: MessageReader<ConfirmSelection>,
    selection: Res<SelectedAsset>,
    mut window: ResMut<PickerWindow>,
    mut changed_events: MessageWriter<crate::style::SetStyleImage>,
) {
    for _ in events.read() {
        let Some((url, kind)) = selection_commit(&selection) else {
            continue;
        };
        changed_events.write(crate::style::SetStyleImage { url, kind });
        window.is_open = false;
    }
}

/// Back navigation from the loading/error placeholder. Counters stay
/// untouched; navigating away does not cancel in-flight uploads.
pub fn handle_dismiss_status(
    mut events: MessageReader<DismissPickerStatus>,
    mut lifecycle: ResMut<PickerLifecycle>,
) {
    for _ in events.read() {
        lifecycle.reset();
    }
}

pub fn log_lifecycle_transitions(lifecycle: Res<PickerLifecycle>) {
    debug!("picker status: {:?}", lifecycle.status());
}

pub fn log_selection_changes(selection: Res<SelectedAsset>) {
    if selection.is_empty() {
        debug!("selection cleared");
    } else {
        debug!("selected asset: {} ({})", selection.url, selection.kind);
    }
}
