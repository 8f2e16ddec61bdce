//! Unit tests for the picker core: upload tracking, lifecycle transitions,
//! tab activation and the confirm guard.

use super::catalog::MARKER_KIND;
use super::lifecycle::{PickerLifecycle, PickerStatus};
use super::orchestrator::selection_commit;
use super::selection::SelectedAsset;
use super::tabs::{PickerTab, TabPane};
use super::tracker::UploadTracker;
use crate::storage::{RemoteAsset, parse_error_body};

fn selected(url: &str) -> SelectedAsset {
    let mut selection = SelectedAsset::default();
    selection.set(url.to_string(), MARKER_KIND.to_string());
    selection
}

// Upload tracker tests

#[test]
fn test_tracker_counts_match_begin_end_pairs() {
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    tracker.begin(&mut lifecycle);
    tracker.begin(&mut lifecycle);
    assert_eq!(tracker.in_flight(), 3);

    tracker.end(&mut lifecycle, true, String::new());
    tracker.end(&mut lifecycle, true, String::new());
    assert_eq!(tracker.in_flight(), 1);

    tracker.end(&mut lifecycle, true, String::new());
    assert_eq!(tracker.in_flight(), 0);
}

#[test]
fn test_single_upload_success_round_trip() {
    // Scenario B: one upload, success, completion signal fires
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    assert_eq!(tracker.in_flight(), 1);
    assert!(lifecycle.is_loading());

    let all_done = tracker.end(&mut lifecycle, true, String::new());
    assert!(all_done);
    assert_eq!(tracker.in_flight(), 0);
    assert_eq!(*lifecycle.status(), PickerStatus::Idle);

    // The completion signal switches the pane to "your uploads" without
    // touching the selection
    let mut pane = TabPane::default();
    let mut selection = selected("https://assets.example.com/u/1/marker.png");
    pane.activate(PickerTab::YourUploads, &mut selection);
    assert_eq!(pane.active(), PickerTab::YourUploads);
    assert_eq!(selection.url, "https://assets.example.com/u/1/marker.png");
}

#[test]
fn test_overlapping_uploads_first_failure_is_sticky() {
    // Scenario A: two uploads in flight, the failure survives the later
    // success
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    assert_eq!(tracker.in_flight(), 1);
    assert!(lifecycle.is_loading());

    tracker.begin(&mut lifecycle);
    assert_eq!(tracker.in_flight(), 2);
    assert!(lifecycle.is_loading());

    let all_done = tracker.end(
        &mut lifecycle,
        false,
        parse_error_body(r#"{"errors":"too large"}"#),
    );
    assert!(!all_done);
    assert_eq!(tracker.in_flight(), 1);
    assert_eq!(*lifecycle.status(), PickerStatus::Error("too large".to_string()));

    let all_done = tracker.end(&mut lifecycle, true, String::new());
    assert!(!all_done);
    assert_eq!(tracker.in_flight(), 0);
    assert_eq!(*lifecycle.status(), PickerStatus::Error("too large".to_string()));
}

#[test]
fn test_error_survives_any_sibling_outcome() {
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    for _ in 0..4 {
        tracker.begin(&mut lifecycle);
    }

    tracker.end(&mut lifecycle, false, "quota exceeded".to_string());
    tracker.end(&mut lifecycle, true, String::new());
    // A later failure updates the message; the status stays error
    tracker.end(&mut lifecycle, false, "bad file".to_string());
    let all_done = tracker.end(&mut lifecycle, true, String::new());

    assert!(!all_done);
    assert_eq!(tracker.in_flight(), 0);
    assert_eq!(*lifecycle.status(), PickerStatus::Error("bad file".to_string()));
}

#[test]
fn test_completion_order_does_not_matter() {
    // success-then-failure and failure-then-success end in the same state
    for failure_first in [true, false] {
        let mut tracker = UploadTracker::default();
        let mut lifecycle = PickerLifecycle::default();

        tracker.begin(&mut lifecycle);
        tracker.begin(&mut lifecycle);

        tracker.end(&mut lifecycle, !failure_first, "failed".to_string());
        tracker.end(&mut lifecycle, failure_first, "failed".to_string());

        assert_eq!(tracker.in_flight(), 0);
        assert_eq!(*lifecycle.status(), PickerStatus::Error("failed".to_string()));
    }
}

#[test]
fn test_malformed_failure_payload_degrades_to_empty_message() {
    // Scenario C
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    tracker.end(&mut lifecycle, false, parse_error_body("<html>502</html>"));

    assert_eq!(*lifecycle.status(), PickerStatus::Error(String::new()));
    assert_eq!(lifecycle.error_message(), Some(""));
}

#[test]
#[should_panic(expected = "upload tracker underflow")]
fn test_tracker_underflow_is_reported() {
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();
    tracker.end(&mut lifecycle, true, String::new());
}

#[test]
fn test_new_batch_replaces_sticky_error() {
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    tracker.end(&mut lifecycle, false, "too large".to_string());
    assert!(lifecycle.has_error());

    tracker.begin(&mut lifecycle);
    assert!(lifecycle.is_loading());
    assert!(tracker.end(&mut lifecycle, true, String::new()));
}

#[test]
fn test_back_navigation_resets_status_but_not_counters() {
    let mut tracker = UploadTracker::default();
    let mut lifecycle = PickerLifecycle::default();

    tracker.begin(&mut lifecycle);
    tracker.begin(&mut lifecycle);
    tracker.end(&mut lifecycle, false, "too large".to_string());

    // Back from the error placeholder: status only, the remaining upload
    // keeps its pairing
    lifecycle.reset();
    assert_eq!(*lifecycle.status(), PickerStatus::Idle);
    assert_eq!(tracker.in_flight(), 1);

    let all_done = tracker.end(&mut lifecycle, true, String::new());
    assert!(all_done);
    assert_eq!(tracker.in_flight(), 0);
}

// Confirm guard tests

#[test]
fn test_confirm_is_a_no_op_while_nothing_is_selected() {
    assert_eq!(selection_commit(&SelectedAsset::default()), None);

    // kind alone does not enable confirm
    let mut selection = SelectedAsset::default();
    selection.kind = MARKER_KIND.to_string();
    assert_eq!(selection_commit(&selection), None);

    // clearing disables it again
    let mut selection = selected("https://assets.example.com/u/1/marker.png");
    selection.clear();
    assert_eq!(selection_commit(&selection), None);
}

#[test]
fn test_confirm_enabled_immediately_with_seeded_url() {
    // Scenario D: the dialog opens seeded with the style's current image
    let selection = selected("http://x/icon.png");
    assert_eq!(
        selection_commit(&selection),
        Some(("http://x/icon.png".to_string(), MARKER_KIND.to_string()))
    );
}

// Tab pane tests

#[test]
fn test_upload_file_activation_clears_selection() {
    let mut pane = TabPane::default();
    let mut selection = selected("https://cdn.example.com/icons/maki-icons/bus-18.svg");

    pane.activate(PickerTab::UploadFile, &mut selection);

    assert!(selection.is_empty());
    assert!(selection.kind.is_empty());
    assert_eq!(pane.disclaimer(), None);
}

#[test]
fn test_other_tabs_preserve_selection() {
    for tab in [
        PickerTab::MakiIcons,
        PickerTab::SimpleIcons,
        PickerTab::PinIcons,
        PickerTab::YourUploads,
    ] {
        let mut pane = TabPane::default();
        let mut selection = selected("https://assets.example.com/u/1/marker.png");
        pane.activate(tab, &mut selection);
        assert_eq!(selection.url, "https://assets.example.com/u/1/marker.png");
    }
}

#[test]
fn test_reactivating_the_active_tab_is_idempotent() {
    let mut pane = TabPane::default();
    let mut selection = selected("https://assets.example.com/u/1/marker.png");

    pane.activate(PickerTab::PinIcons, &mut selection);
    let disclaimer = pane.disclaimer();

    pane.activate(PickerTab::PinIcons, &mut selection);
    assert_eq!(pane.active(), PickerTab::PinIcons);
    assert_eq!(pane.disclaimer(), disclaimer);
    assert_eq!(selection.url, "https://assets.example.com/u/1/marker.png");
}

#[test]
fn test_disclaimers_follow_the_registry() {
    let mut pane = TabPane::default();
    let mut selection = SelectedAsset::default();

    // Default tab shows its disclaimer before any activation
    assert_eq!(pane.disclaimer(), PickerTab::MakiIcons.disclaimer());
    assert!(pane.disclaimer().is_some());

    for tab in PickerTab::all() {
        pane.activate(*tab, &mut selection);
        assert_eq!(pane.disclaimer(), tab.disclaimer());
    }

    // Icon tabs carry one, upload-oriented tabs do not
    assert!(PickerTab::MakiIcons.disclaimer().is_some());
    assert!(PickerTab::SimpleIcons.disclaimer().is_some());
    assert!(PickerTab::PinIcons.disclaimer().is_some());
    assert!(PickerTab::YourUploads.disclaimer().is_none());
    assert!(PickerTab::UploadFile.disclaimer().is_none());
}

#[test]
fn test_tab_content_is_materialized_lazily_and_cached() {
    let mut pane = TabPane::default();
    let mut selection = SelectedAsset::default();

    for tab in PickerTab::all() {
        assert!(!pane.is_materialized(*tab));
    }

    pane.activate(PickerTab::YourUploads, &mut selection);
    assert!(pane.is_materialized(PickerTab::YourUploads));
    assert!(!pane.is_materialized(PickerTab::UploadFile));

    // Mutations survive switching away and back: the cached state is
    // reused, not rebuilt
    pane.uploads_mut().unwrap().assets.push(RemoteAsset {
        public_url: "https://assets.example.com/u/1/marker.png".to_string(),
        kind: MARKER_KIND.to_string(),
    });
    pane.activate(PickerTab::MakiIcons, &mut selection);
    pane.activate(PickerTab::YourUploads, &mut selection);
    assert_eq!(pane.uploads_mut().unwrap().assets.len(), 1);
}

#[test]
fn test_registry_has_five_distinct_tabs() {
    let tabs = PickerTab::all();
    assert_eq!(tabs.len(), 5);

    let mut names: Vec<&str> = tabs.iter().map(|tab| tab.name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 5);

    for tab in tabs {
        assert!(!tab.label().is_empty());
    }
}
