//! Bookkeeping for overlapping upload operations.

use bevy::prelude::*;

use super::lifecycle::PickerLifecycle;

/// Counts in-flight uploads and reflects the count into [`PickerLifecycle`].
///
/// A counter (not a boolean) because the user may pick several files at once
/// and each becomes its own network operation, completing in arbitrary order.
/// Every `begin` is paired with exactly one `end`, success or failure.
#[derive(Resource, Debug, Default)]
pub struct UploadTracker {
    in_flight: u32,
}

impl UploadTracker {
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Register one upload starting. The picker shows the loading
    /// placeholder as long as at least one upload is outstanding.
    pub fn begin(&mut self, lifecycle: &mut PickerLifecycle) {
        self.in_flight += 1;
        lifecycle.set_loading();
    }

    /// Register one upload finishing. Returns `true` when this was the last
    /// outstanding upload and no failure was recorded for the batch — the
    /// "all uploads complete" signal.
    ///
    /// A failure makes the error state sticky: later successes never clear
    /// it, while a later failure updates the message (the placeholder shows
    /// the most recent one). An `end` without a matching `begin` is a
    /// begin/end pairing bug; it is reported and the completion signal is
    /// suppressed rather than the count being quietly clamped.
    pub fn end(
        &mut self,
        lifecycle: &mut PickerLifecycle,
        success: bool,
        error_message: String,
    ) -> bool {
        if self.in_flight == 0 {
            error!("upload tracker: end() without a matching begin()");
            debug_assert!(false, "upload tracker underflow");
            return false;
        }

        self.in_flight -= 1;

        if !success {
            lifecycle.set_error(error_message);
        }

        if self.in_flight == 0 && !lifecycle.has_error() {
            lifecycle.reset();
            return true;
        }

        false
    }
}
