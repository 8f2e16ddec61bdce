//! The currently chosen asset.

use bevy::prelude::*;

/// Resource holding the asset the user has picked, shared between the tab
/// content renderers (read + pick) and the orchestrator (seed, clear, commit).
///
/// An empty `url` means nothing is selected; the confirm action stays
/// disabled until it is non-empty.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedAsset {
    pub url: String,
    pub kind: String,
}

impl SelectedAsset {
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    pub fn set(&mut self, url: String, kind: String) {
        self.url = url;
        self.kind = kind;
    }

    pub fn clear(&mut self) {
        self.url.clear();
        self.kind.clear();
    }
}
