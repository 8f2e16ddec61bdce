//! Inline double-click-to-edit state for the style name.
//!
//! Click handling is a per-instance debouncer: the first click is held for a
//! short window, a second click inside the window begins editing, and a
//! window that expires releases the held click as a single click. All state
//! is scoped to the editor instance, so concurrent editors cannot interfere
//! with each other's click counts.

/// What a registered click meant, as far as we can tell at click time.
#[derive(Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Held for disambiguation (or ignored while editing).
    Pending,
    /// Second click inside the window: the caller should start editing.
    BeginEdit,
}

pub struct InlineEditor {
    /// Disambiguation window in seconds.
    timeout: f64,
    /// Timestamp of a click waiting to be disambiguated.
    pending_click: Option<f64>,
    editing: bool,
    wants_focus: bool,
    /// Text being edited; only meaningful while `is_editing()`.
    pub buffer: String,
}

impl InlineEditor {
    pub fn new(timeout: f64) -> Self {
        Self {
            timeout,
            pending_click: None,
            editing: false,
            wants_focus: false,
            buffer: String::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Feed one click at `now` (seconds) into the debouncer.
    pub fn register_click(&mut self, now: f64) -> ClickAction {
        if self.editing {
            return ClickAction::Pending;
        }

        match self.pending_click.take() {
            Some(first) if now - first <= self.timeout => ClickAction::BeginEdit,
            _ => {
                self.pending_click = Some(now);
                ClickAction::Pending
            }
        }
    }

    /// Release an expired held click. Returns `true` at most once per held
    /// click, when its disambiguation window has passed.
    pub fn poll_single_click(&mut self, now: f64) -> bool {
        if let Some(first) = self.pending_click
            && now - first > self.timeout
        {
            self.pending_click = None;
            return true;
        }
        false
    }

    pub fn begin_edit(&mut self, current: &str) {
        self.editing = true;
        self.wants_focus = true;
        self.pending_click = None;
        self.buffer = current.to_string();
    }

    /// One-shot: `true` on the first call after editing begins, so the UI
    /// can move focus into the text field exactly once.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_focus)
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    /// Finish editing. Returns the sanitized value, or `None` when it
    /// sanitizes to empty (treated as a cancel).
    pub fn commit(&mut self) -> Option<String> {
        if !self.editing {
            return None;
        }
        self.editing = false;

        let value = sanitize(&self.buffer);
        self.buffer.clear();
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Strip control characters and surrounding whitespace from user input.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
