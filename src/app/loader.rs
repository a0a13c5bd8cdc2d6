// CourseLens - app/loader.rs
//
// Course file loading. Orchestrates extension check, file read, JSON parse,
// per-entry validation and normalization.
//
// Architecture:
//   - `parse_courses` is the pure text -> courses pipeline.
//   - `load_file` adds the file read on top.
//   - `LoadManager` lives on the UI thread and runs `load_file` on a
//     background thread per request, delivering `LoadCompletion`s over one
//     long-lived mpsc channel. Nothing is cancelled; every completion is
//     tagged with the generation of the request that produced it so the
//     state layer can decide whether a late result still applies.

use crate::core::model::Course;
use crate::core::normalize::normalize;
use crate::core::validate::{kind_name, validate, Validation};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::LoadError;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

// =============================================================================
// Results
// =============================================================================

/// A rejected array entry. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDiagnostic {
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for EntryDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry {}: {}", self.index, self.reason)
    }
}

/// Outcome of a load that produced at least one course.
#[derive(Debug, Clone, Default)]
pub struct ParsedCourses {
    /// Valid courses in file order.
    pub courses: Vec<Course>,

    /// Itemised rejections, capped at `MAX_LOAD_DIAGNOSTICS`.
    pub diagnostics: Vec<EntryDiagnostic>,

    /// Total number of rejected entries (may exceed `diagnostics.len()`).
    pub rejected: usize,
}

impl ParsedCourses {
    /// Non-blocking summary shown when some entries were skipped.
    pub fn skipped_message(&self) -> Option<String> {
        if self.rejected == 0 {
            return None;
        }
        let noun = if self.rejected == 1 { "entry" } else { "entries" };
        Some(format!(
            "Loaded {} course(s). Skipped {} invalid {noun}.",
            self.courses.len(),
            self.rejected
        ))
    }

    /// Rejections counted but not itemised in `diagnostics`.
    pub fn omitted_diagnostics(&self) -> usize {
        self.rejected.saturating_sub(self.diagnostics.len())
    }

    fn reject(&mut self, index: usize, reason: String) {
        tracing::debug!(index, reason = %reason, "Entry rejected");
        self.rejected += 1;
        if self.diagnostics.len() < constants::MAX_LOAD_DIAGNOSTICS {
            self.diagnostics.push(EntryDiagnostic { index, reason });
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Returns true if the path ends in `.json` (any case).
pub fn has_course_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(constants::COURSE_FILE_EXTENSION))
}

/// Reject paths that do not name a `.json` file.
pub fn check_file_type(path: &Path) -> Result<(), LoadError> {
    if has_course_extension(path) {
        Ok(())
    } else {
        Err(LoadError::WrongFileType {
            path: path.to_path_buf(),
        })
    }
}

/// Parse course file text into valid courses plus per-entry diagnostics.
///
/// Fails when the text is blank, is not JSON, is not a JSON array, or
/// yields no valid course at all.
pub fn parse_courses(text: &str) -> Result<ParsedCourses, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let root: Value =
        serde_json::from_str(text).map_err(|source| LoadError::MalformedJson { source })?;

    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::NotAnArray {
                found: kind_name(&other),
            })
        }
    };

    let mut parsed = ParsedCourses {
        courses: Vec::with_capacity(items.len()),
        ..Default::default()
    };

    for (i, item) in items.iter().enumerate() {
        let index = i + 1;
        if let Validation::Rejected(rejection) = validate(item) {
            parsed.reject(index, rejection.reason().to_string());
            continue;
        }
        match normalize(item) {
            Ok(course) => {
                tracing::debug!(course = %course.summary(), "Course normalized");
                parsed.courses.push(course);
            }
            Err(e) => {
                parsed.reject(index, format!("Error creating Course object ({e})."));
            }
        }
    }

    if parsed.courses.is_empty() {
        return Err(LoadError::NoValidCourses {
            rejected: parsed.rejected,
        });
    }

    Ok(parsed)
}

/// Full synchronous load of one course file.
pub fn load_file(path: &Path, max_bytes: u64) -> Result<ParsedCourses, LoadError> {
    check_file_type(path)?;
    let text = fs::read_text_lossy(path, max_bytes)?;
    parse_courses(&text)
}

// =============================================================================
// LoadManager
// =============================================================================

/// A load accepted by the state layer, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub path: PathBuf,
}

/// Result of one background load.
#[derive(Debug)]
pub struct LoadCompletion {
    pub generation: u64,
    pub path: PathBuf,
    pub result: Result<ParsedCourses, LoadError>,
}

/// Runs course file reads off the UI thread.
pub struct LoadManager {
    tx: mpsc::Sender<LoadCompletion>,
    rx: mpsc::Receiver<LoadCompletion>,
}

impl LoadManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start a load on a background thread. Earlier loads keep running.
    pub fn start_load(&self, request: LoadRequest, max_bytes: u64) {
        let tx = self.tx.clone();
        tracing::info!(
            file = %request.path.display(),
            generation = request.generation,
            "Load started"
        );

        std::thread::spawn(move || {
            let result = load_file(&request.path, max_bytes);
            // Receiver dropped means the UI closed; nothing left to notify.
            let _ = tx.send(LoadCompletion {
                generation: request.generation,
                path: request.path,
                result,
            });
        });
    }

    /// Poll for completions without blocking, in completion order.
    pub fn poll_completions(&self, max: usize) -> Vec<LoadCompletion> {
        let mut completions = Vec::new();
        while completions.len() < max {
            match self.rx.try_recv() {
                Ok(c) => completions.push(c),
                Err(_) => break,
            }
        }
        completions
    }

    /// Block until the next completion arrives. Used by headless callers.
    pub fn wait_completion(&self) -> Option<LoadCompletion> {
        self.rx.recv().ok()
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}
