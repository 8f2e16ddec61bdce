//! Tab registry and the lazily materialized per-tab content states.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::storage::{PickedFile, RemoteAsset};

use super::catalog::{IconCatalog, MAKI_ICONS, PIN_ICONS, SIMPLE_ICONS};
use super::selection::SelectedAsset;

/// The five asset-source tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerTab {
    #[default]
    MakiIcons,
    SimpleIcons,
    PinIcons,
    YourUploads,
    UploadFile,
}

impl PickerTab {
    pub fn all() -> &'static [PickerTab] {
        &[
            PickerTab::MakiIcons,
            PickerTab::SimpleIcons,
            PickerTab::PinIcons,
            PickerTab::YourUploads,
            PickerTab::UploadFile,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PickerTab::MakiIcons => "maki-icons",
            PickerTab::SimpleIcons => "simple-icons",
            PickerTab::PinIcons => "pin-icons",
            PickerTab::YourUploads => "your-uploads",
            PickerTab::UploadFile => "upload-file",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PickerTab::MakiIcons => "Maki icons",
            PickerTab::SimpleIcons => "Simple icons",
            PickerTab::PinIcons => "Pin icons",
            PickerTab::YourUploads => "Your uploads",
            PickerTab::UploadFile => "Upload file",
        }
    }

    pub fn catalog(&self) -> Option<&'static IconCatalog> {
        match self {
            PickerTab::MakiIcons => Some(&MAKI_ICONS),
            PickerTab::SimpleIcons => Some(&SIMPLE_ICONS),
            PickerTab::PinIcons => Some(&PIN_ICONS),
            PickerTab::YourUploads | PickerTab::UploadFile => None,
        }
    }

    /// Attribution text for the disclaimer row. The upload-oriented tabs
    /// carry none, which hides the row.
    pub fn disclaimer(&self) -> Option<&'static str> {
        self.catalog().map(|catalog| catalog.disclaimer)
    }
}

/// Content state for an icon-library tab.
pub struct IconGridState {
    pub catalog: &'static IconCatalog,
}

/// Content state for the "your uploads" tab.
#[derive(Default)]
pub struct UserUploadsState {
    pub assets: Vec<RemoteAsset>,
    /// At least one listing fetch has finished (even if it failed).
    pub loaded: bool,
    pub fetching: bool,
    /// Listing failures stay local to this tab; they never touch the
    /// picker lifecycle.
    pub fetch_error: Option<String>,
    pub pending_fetch: Option<Task<Result<Vec<RemoteAsset>, String>>>,
}

/// Content state for the "upload file" tab.
#[derive(Default)]
pub struct UploadFormState {
    /// Files of the in-flight batch, shown while they upload.
    pub picked: Vec<PickedFile>,
    /// Files rejected by validation, with the reason.
    pub invalid: Vec<(PathBuf, String)>,
    pub pending_browse: Option<Task<Option<Vec<PathBuf>>>>,
}

pub enum TabContent {
    Icons(IconGridState),
    Uploads(UserUploadsState),
    UploadForm(UploadFormState),
}

impl TabContent {
    fn build(tab: PickerTab) -> Self {
        match tab.catalog() {
            Some(catalog) => TabContent::Icons(IconGridState { catalog }),
            None => match tab {
                PickerTab::YourUploads => TabContent::Uploads(UserUploadsState::default()),
                _ => TabContent::UploadForm(UploadFormState::default()),
            },
        }
    }
}

/// The tab pane: active tab, its disclaimer, and a content cache keyed by
/// tab. Content states are built by [`TabContent::build`] on first
/// activation and reused afterwards, never eagerly.
#[derive(Resource)]
pub struct TabPane {
    active: PickerTab,
    disclaimer: Option<&'static str>,
    contents: HashMap<PickerTab, TabContent>,
}

impl Default for TabPane {
    fn default() -> Self {
        Self {
            active: PickerTab::default(),
            disclaimer: PickerTab::default().disclaimer(),
            contents: HashMap::new(),
        }
    }
}

impl TabPane {
    pub fn active(&self) -> PickerTab {
        self.active
    }

    pub fn disclaimer(&self) -> Option<&'static str> {
        self.disclaimer
    }

    /// Switch to `tab`: re-evaluate the disclaimer, clear the selection when
    /// entering the upload tab (uploading must never silently carry over a
    /// previously selected icon), and materialize the content state on first
    /// visit. Re-activating the already active tab only re-applies the
    /// disclaimer.
    pub fn activate(&mut self, tab: PickerTab, selection: &mut SelectedAsset) {
        self.active = tab;
        self.disclaimer = tab.disclaimer();

        if tab == PickerTab::UploadFile {
            selection.clear();
        }

        self.materialize(tab);
    }

    pub fn materialize(&mut self, tab: PickerTab) -> &mut TabContent {
        self.contents
            .entry(tab)
            .or_insert_with(|| TabContent::build(tab))
    }

    #[allow(dead_code)]
    pub fn is_materialized(&self, tab: PickerTab) -> bool {
        self.contents.contains_key(&tab)
    }

    pub fn active_content_mut(&mut self) -> &mut TabContent {
        self.materialize(self.active)
    }

    pub fn uploads_mut(&mut self) -> Option<&mut UserUploadsState> {
        match self.contents.get_mut(&PickerTab::YourUploads) {
            Some(TabContent::Uploads(state)) => Some(state),
            _ => None,
        }
    }

    pub fn upload_form_mut(&mut self) -> Option<&mut UploadFormState> {
        match self.contents.get_mut(&PickerTab::UploadFile) {
            Some(TabContent::UploadForm(state)) => Some(state),
            _ => None,
        }
    }
}
