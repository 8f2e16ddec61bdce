//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Upload size cap enforced before a file becomes an upload request
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Columns in the icon catalog grid
pub const ICON_GRID_COLUMNS: usize = 6;

/// Seconds within which a second click counts as a double click in the
/// inline name editor
pub const INLINE_EDIT_CLICK_TIMEOUT: f64 = 0.2;
