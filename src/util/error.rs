// CourseLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging; user-facing
// wording lives in `LoadError::user_message` so logs keep the detail.

use super::constants;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CourseLens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CourseLensError {
    /// Loading a course file failed.
    Load(LoadError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CourseLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CourseLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors that abort a course file load. Every variant clears the collection.
#[derive(Debug)]
pub enum LoadError {
    /// The file name does not end in `.json` (case-insensitive).
    WrongFileType { path: PathBuf },

    /// The file could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The file exceeds the configured size cap.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The file is empty or contains only whitespace.
    EmptyFile,

    /// The content is not valid JSON.
    MalformedJson { source: serde_json::Error },

    /// The JSON root is something other than an array.
    NotAnArray { found: &'static str },

    /// Every entry in the array was rejected.
    NoValidCourses { rejected: usize },
}

impl LoadError {
    /// The single message shown to the user for this failure.
    ///
    /// Empty, malformed and non-array content share one message; the
    /// distinction is only kept for logging.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::WrongFileType { .. } => constants::MSG_WRONG_FILE_TYPE,
            Self::Read { .. } | Self::FileTooLarge { .. } => constants::MSG_READ_ERROR,
            Self::EmptyFile | Self::MalformedJson { .. } | Self::NotAnArray { .. } => {
                constants::MSG_INVALID_FORMAT
            }
            Self::NoValidCourses { .. } => constants::MSG_NO_VALID_COURSES,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFileType { path } => {
                write!(f, "'{}' is not a .json file", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::EmptyFile => write!(f, "Empty file"),
            Self::MalformedJson { source } => write!(f, "Malformed JSON: {source}"),
            Self::NotAnArray { found } => {
                write!(f, "JSON root is {found}, not an array of courses")
            }
            Self::NoValidCourses { rejected } => {
                write!(f, "No valid courses ({rejected} entries rejected)")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::MalformedJson { source } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for CourseLensError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Normalize errors
// ---------------------------------------------------------------------------

/// A raw record could not be turned into a Course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record is not a JSON object.
    NotAnObject { found: &'static str },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(f, "expected an object, found {found}"),
        }
    }
}

impl std::error::Error for NormalizeError {}

// ---------------------------------------------------------------------------
// View errors
// ---------------------------------------------------------------------------

/// Errors raised while recomputing the filtered/sorted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A view index no longer resolves into the course collection.
    StaleIndex { index: usize, len: usize },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleIndex { index, len } => write!(
                f,
                "view index {index} is out of range for a collection of {len} courses"
            ),
        }
    }
}

impl std::error::Error for ViewError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for CourseLensError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for CourseLens results.
pub type Result<T> = std::result::Result<T, CourseLensError>;
