// CourseLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CourseLens";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CourseLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Course defaults
// =============================================================================

/// Substituted when a record has no usable `id`.
pub const DEFAULT_ID: &str = "Unknown ID";

/// Substituted when a record has no usable `title`.
pub const DEFAULT_TITLE: &str = "Untitled Course";

/// Substituted when a record has no usable `department`.
pub const DEFAULT_DEPARTMENT: &str = "Unknown Department";

/// Substituted when a record has no usable `semester`.
pub const DEFAULT_SEMESTER: &str = "Unknown Semester";

/// Substituted when a record has no usable `description`.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Substituted when a record has no usable `skill`.
pub const DEFAULT_SKILL: &str = "None listed";

/// Display text for an unassigned instructor.
pub const INSTRUCTOR_TBA: &str = "TBA";

/// Display text for a level/credits value that was missing or not finite.
pub const MEASURE_UNSET: &str = "N/A";

// =============================================================================
// Loading limits
// =============================================================================

/// Accepted course file extension (compared case-insensitively).
pub const COURSE_FILE_EXTENSION: &str = "json";

/// Default maximum size of a course file in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MiB

/// Minimum user-configurable course file size cap.
pub const MIN_MAX_FILE_SIZE: u64 = 1024; // 1 KiB

/// Hard upper bound on the course file size cap.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024; // 256 MiB

/// Retry delays for transient I/O errors while reading a course file.
pub const READ_RETRY_DELAYS_MS: [u64; 3] = [50, 100, 200];

/// Maximum number of per-entry diagnostics kept for a single load.
/// Further rejections are still counted but not itemised.
pub const MAX_LOAD_DIAGNOSTICS: usize = 1_000;

/// Maximum number of load completions applied per UI frame.
pub const MAX_LOAD_MESSAGES_PER_FRAME: usize = 8;

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_WRONG_FILE_TYPE: &str = "Invalid file type. Please select a .json file.";

pub const MSG_READ_ERROR: &str = "Error reading file. Please try again.";

pub const MSG_INVALID_FORMAT: &str =
    "Invalid JSON file format. Please make sure it is valid course data.";

pub const MSG_NO_VALID_COURSES: &str =
    "No valid courses found in this file. Please check the JSON format.";

pub const MSG_VIEW_UPDATE_FAILED: &str =
    "Something went wrong while updating the view, but the page is still usable.";

pub const MSG_EMPTY_LIST: &str =
    "No courses to display. Try loading a JSON file or changing filters.";

pub const MSG_NO_SELECTION: &str = "Select a course from the list to see its details here.";

// =============================================================================
// UI defaults
// =============================================================================

/// Label of the unrestricted facet option.
pub const FACET_ALL_LABEL: &str = "All";

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
