// CourseLens - app/state.rs
//
// Application state management. Holds the loaded courses, facet options,
// filter and sort selections, the computed view, and the selected course.
// Owned by the eframe::App implementation; every mutation is synchronous
// on the UI thread, so no locking is involved.
//
// View pipeline: filter -> sort -> reconcile selection. It runs after every
// load, filter change and sort change. A row click only changes the
// selection and never recomputes the view.

use crate::app::loader::{self, LoadCompletion, LoadRequest, ParsedCourses};
use crate::core::facets::{Facet, FacetOptions};
use crate::core::filter::{self, FilterState};
use crate::core::model::Course;
use crate::core::sort::{self, SortMode};
use crate::platform::config::AppConfig;
use crate::util::constants;
use crate::util::error::{LoadError, ViewError};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Severity of the message shown in the message region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A failed load or view update.
    Error,
    /// Non-blocking notice, e.g. skipped entries.
    Info,
}

/// Text for the message region above the course list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl UserMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }
}

/// Coarse UI state, derived from the collection and the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing loaded, or the last load failed.
    NoFileLoaded,
    /// Courses are visible and one of them is selected.
    LoadedWithSelection,
    /// Courses are loaded but the filters exclude all of them.
    LoadedEmptyResult,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All courses from the most recent successful load, in file order.
    pub courses: Vec<Course>,

    /// Option lists for the facet controls.
    pub facet_options: FacetOptions,

    /// Current facet selections.
    pub filter_state: FilterState,

    /// Current sort mode.
    pub sort_mode: SortMode,

    /// Indices into `courses`, filtered and sorted.
    pub view: Vec<usize>,

    /// Id of the selected course.
    pub selected_id: Option<String>,

    /// Error or notice for the message region.
    pub message: Option<UserMessage>,

    /// Name of the most recently chosen file, shown even if loading failed.
    pub file_name: Option<String>,

    /// When the current collection was loaded.
    pub loaded_at: Option<DateTime<Local>>,

    /// Generation of the newest load request.
    pub load_generation: u64,

    /// Loads started but not yet completed.
    pub loads_in_flight: usize,

    /// Whether completions of superseded loads are dropped.
    pub discard_stale_loads: bool,

    /// Course file size cap in bytes.
    pub max_file_size: u64,

    /// Path queued for loading on the next frame (CLI argument).
    pub pending_load: Option<PathBuf>,

    /// Status message for the status bar.
    pub status_message: String,

    pub dark_mode: bool,
    pub font_size: f32,
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            courses: Vec::new(),
            facet_options: FacetOptions::default(),
            filter_state: FilterState::default(),
            sort_mode: config.default_sort,
            view: Vec::new(),
            selected_id: None,
            message: None,
            file_name: None,
            loaded_at: None,
            load_generation: 0,
            loads_in_flight: 0,
            discard_stale_loads: config.discard_stale_loads,
            max_file_size: config.max_file_size,
            pending_load: None,
            status_message: "Ready. Open a course file to begin.".to_string(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            show_about: false,
            debug_mode,
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Handle a file choice. `None` (dialog cancelled) is a no-op.
    ///
    /// A wrong extension fails immediately and clears the collection.
    /// Otherwise returns the request to hand to the `LoadManager`.
    pub fn begin_load(&mut self, path: Option<PathBuf>) -> Option<LoadRequest> {
        let path = path?;
        self.file_name = Some(display_name(&path));
        self.load_generation += 1;

        if let Err(e) = loader::check_file_type(&path) {
            self.fail_load(&e);
            return None;
        }

        self.loads_in_flight += 1;
        self.status_message = format!("Loading {}\u{2026}", display_name(&path));
        Some(LoadRequest {
            generation: self.load_generation,
            path,
        })
    }

    /// Apply a finished load. Returns false if it was discarded as stale.
    pub fn finish_load(&mut self, completion: LoadCompletion) -> bool {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);

        if self.discard_stale_loads && completion.generation < self.load_generation {
            tracing::debug!(
                file = %completion.path.display(),
                generation = completion.generation,
                newest = self.load_generation,
                "Discarding stale load result"
            );
            return false;
        }

        match completion.result {
            Ok(parsed) => self.apply_courses(parsed, &completion.path),
            Err(e) => self.fail_load(&e),
        }
        true
    }

    fn apply_courses(&mut self, parsed: ParsedCourses, path: &Path) {
        if parsed.rejected > 0 {
            let mut details: Vec<String> =
                parsed.diagnostics.iter().map(|d| d.to_string()).collect();
            let omitted = parsed.omitted_diagnostics();
            if omitted > 0 {
                details.push(format!(
                    "... and {omitted} more (see debug log for every entry)"
                ));
            }
            tracing::warn!(
                file = %path.display(),
                rejected = parsed.rejected,
                "Course data warnings:\n{}",
                details.join("\n")
            );
        }

        self.message = parsed.skipped_message().map(UserMessage::info);
        self.courses = parsed.courses;
        self.facet_options = FacetOptions::build(&self.courses);
        for facet in self.filter_state.retain_available(&self.facet_options) {
            tracing::debug!(facet = facet.label(), "Facet selection no longer available; reset to All");
        }
        self.selected_id = None;
        self.loaded_at = Some(Local::now());
        self.status_message = format!(
            "Loaded {} course(s) from {}.",
            self.courses.len(),
            display_name(path)
        );
        tracing::info!(
            file = %path.display(),
            courses = self.courses.len(),
            rejected = parsed.rejected,
            "Courses loaded"
        );

        self.update_view();
    }

    fn fail_load(&mut self, error: &LoadError) {
        tracing::warn!(error = %error, "Course load failed");
        self.message = Some(UserMessage::error(error.user_message()));
        self.status_message = "Load failed.".to_string();
        self.clear_courses();
    }

    /// Empty the collection and reset the selection.
    ///
    /// Facet selections are kept so a later load can restore them if the
    /// values still exist.
    pub fn clear_courses(&mut self) {
        self.courses.clear();
        self.view.clear();
        self.facet_options = FacetOptions::default();
        self.selected_id = None;
        self.loaded_at = None;
    }

    // -------------------------------------------------------------------------
    // Filter / sort / selection events
    // -------------------------------------------------------------------------

    /// Select a facet value ("" for All) and refresh the view.
    pub fn set_filter(&mut self, facet: Facet, value: &str) {
        self.filter_state.set(facet, value);
        self.update_view();
    }

    /// Reset every facet to All and refresh the view.
    pub fn clear_filters(&mut self) {
        self.filter_state = FilterState::default();
        self.update_view();
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.update_view();
    }

    /// Row click: select a course without recomputing the view.
    pub fn select(&mut self, id: &str) {
        if self.courses.iter().any(|c| c.id == id) {
            self.selected_id = Some(id.to_string());
        } else {
            tracing::debug!(id, "Ignoring selection of unknown course id");
        }
    }

    /// Recompute the view, reporting failures instead of propagating them.
    /// On failure the previous view stays in place.
    pub fn update_view(&mut self) {
        let computed = self.compute_view();
        self.apply_view(computed);
    }

    /// Filter, sort and reconcile the selection without touching state.
    ///
    /// Returns the new view and the resolved selection id.
    pub fn compute_view(&self) -> Result<(Vec<usize>, Option<String>), ViewError> {
        let filtered = filter::apply_filters(&self.courses, &self.filter_state);
        let sorted = sort::sort_indices(&self.courses, &filtered, self.sort_mode)?;
        let selected = reconcile_selection(&self.courses, &sorted, self.selected_id.as_deref())?;
        Ok((sorted, selected))
    }

    /// Install a computed view, or report the failure and keep the old one.
    pub fn apply_view(&mut self, computed: Result<(Vec<usize>, Option<String>), ViewError>) {
        match computed {
            Ok((view, selected)) => {
                self.view = view;
                self.selected_id = selected;
            }
            Err(e) => {
                tracing::error!(error = %e, "View update failed");
                self.message = Some(UserMessage::error(constants::MSG_VIEW_UPDATE_FAILED));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Courses in view order.
    pub fn visible_courses(&self) -> Vec<&Course> {
        self.view
            .iter()
            .filter_map(|&idx| self.courses.get(idx))
            .collect()
    }

    /// The first course in view order carrying the selected id.
    pub fn selected_course(&self) -> Option<&Course> {
        let id = self.selected_id.as_deref()?;
        self.view
            .iter()
            .filter_map(|&idx| self.courses.get(idx))
            .find(|c| c.id == id)
    }

    pub fn is_selected(&self, course: &Course) -> bool {
        self.selected_id.as_deref() == Some(course.id.as_str())
    }

    pub fn phase(&self) -> ViewPhase {
        if self.courses.is_empty() {
            ViewPhase::NoFileLoaded
        } else if self.view.is_empty() {
            ViewPhase::LoadedEmptyResult
        } else {
            ViewPhase::LoadedWithSelection
        }
    }
}

/// Resolve the selection against a freshly computed view.
///
/// Keeps `current` if some course in the view has that id; otherwise falls
/// back to the first course in the view, or `None` for an empty view.
pub fn reconcile_selection(
    courses: &[Course],
    view: &[usize],
    current: Option<&str>,
) -> Result<Option<String>, ViewError> {
    let resolve = |idx: usize| {
        courses.get(idx).ok_or(ViewError::StaleIndex {
            index: idx,
            len: courses.len(),
        })
    };

    if let Some(id) = current {
        for &idx in view {
            if resolve(idx)?.id == id {
                return Ok(Some(id.to_string()));
            }
        }
    }

    view.first()
        .map(|&idx| resolve(idx).map(|c| c.id.clone()))
        .transpose()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::loader::parse_courses;

    const SAMPLE: &str = r#"[
        {"id":"CS201","title":"Data Structures","department":"CS","level":200,"credits":4,"semester":"Fall 2024","instructor":"Kim"},
        {"id":"CS101","title":"Intro","department":"CS","level":100,"credits":3,"semester":"Winter 2025"},
        {"id":"MA110","title":"Calculus","department":"Math","level":100,"credits":3,"semester":"Spring 2024"}
    ]"#;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), false)
    }

    fn completion(generation: u64, text: &str) -> LoadCompletion {
        LoadCompletion {
            generation,
            path: PathBuf::from("courses.json"),
            result: parse_courses(text),
        }
    }

    fn loaded(text: &str) -> AppState {
        let mut s = state();
        let req = s.begin_load(Some(PathBuf::from("courses.json"))).unwrap();
        assert!(s.finish_load(completion(req.generation, text)));
        s
    }

    fn visible_ids(s: &AppState) -> Vec<&str> {
        s.visible_courses().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_view_failure_keeps_previous_view() {
        let mut s = loaded(SAMPLE);
        let view = s.view.clone();
        let selected = s.selected_id.clone();

        s.apply_view(Err(ViewError::StaleIndex { index: 7, len: 3 }));

        assert_eq!(s.view, view);
        assert_eq!(s.selected_id, selected);
        let message = s.message.as_ref().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, constants::MSG_VIEW_UPDATE_FAILED);
    }

    #[test]
    fn test_stale_reconcile_is_reported_by_compute_view() {
        let mut s = loaded(SAMPLE);
        // A view built for a larger collection no longer resolves.
        s.courses.truncate(1);
        assert_eq!(
            reconcile_selection(&s.courses, &s.view, Some("MA110")),
            Err(ViewError::StaleIndex { index: 1, len: 1 })
        );
        // Recomputing from the current collection recovers a consistent view.
        let (view, selected) = s.compute_view().unwrap();
        assert_eq!(view, vec![0]);
        assert_eq!(selected.as_deref(), Some("CS201"));
        s.update_view();
        assert_eq!(visible_ids(&s), vec!["CS201"]);
        assert_eq!(s.message, None);
    }

    #[test]
    fn test_initial_phase() {
        let s = state();
        assert_eq!(s.phase(), ViewPhase::NoFileLoaded);
        assert_eq!(s.selected_course(), None);
    }

    #[test]
    fn test_cancelled_dialog_is_noop() {
        let mut s = loaded(SAMPLE);
        let generation = s.load_generation;
        assert_eq!(s.begin_load(None), None);
        assert_eq!(s.load_generation, generation);
        assert_eq!(s.courses.len(), 3);
    }

    #[test]
    fn test_load_selects_first_in_sorted_order() {
        let mut s = state();
        s.sort_mode = SortMode::IdAsc;
        let req = s.begin_load(Some(PathBuf::from("courses.json"))).unwrap();
        s.finish_load(completion(req.generation, SAMPLE));
        assert_eq!(visible_ids(&s), vec!["CS101", "CS201", "MA110"]);
        assert_eq!(s.selected_id.as_deref(), Some("CS101"));
        assert_eq!(s.phase(), ViewPhase::LoadedWithSelection);
        assert_eq!(s.message, None);
        assert_eq!(s.file_name.as_deref(), Some("courses.json"));
        assert!(s.loaded_at.is_some());
    }

    #[test]
    fn test_selection_survives_sort_change() {
        let mut s = loaded(SAMPLE);
        s.select("MA110");
        s.set_sort(SortMode::SemLatest);
        assert_eq!(visible_ids(&s), vec!["CS101", "CS201", "MA110"]);
        assert_eq!(s.selected_id.as_deref(), Some("MA110"));
    }

    #[test]
    fn test_selection_falls_back_when_filtered_out() {
        let mut s = loaded(SAMPLE);
        s.select("MA110");
        s.set_filter(Facet::Department, "CS");
        assert_eq!(visible_ids(&s), vec!["CS201", "CS101"]);
        assert_eq!(s.selected_id.as_deref(), Some("CS201"));
        assert_eq!(s.selected_course().map(|c| c.title.as_str()), Some("Data Structures"));

        s.set_filter(Facet::Level, "300");
        assert_eq!(s.phase(), ViewPhase::LoadedEmptyResult);
        assert_eq!(s.selected_id, None);
        assert_eq!(s.selected_course(), None);

        s.clear_filters();
        assert_eq!(s.view.len(), 3);
        assert_eq!(s.selected_id.as_deref(), Some("CS201"));
    }

    #[test]
    fn test_row_click_does_not_recompute_view() {
        let mut s = loaded(SAMPLE);
        s.set_sort(SortMode::TitleAsc);
        let view = s.view.clone();
        s.select("CS101");
        assert_eq!(s.view, view);
        assert_eq!(s.selected_id.as_deref(), Some("CS101"));

        s.select("NOPE");
        assert_eq!(s.selected_id.as_deref(), Some("CS101"));
    }

    #[test]
    fn test_partial_load_shows_info_message() {
        let s = loaded(r#"[{"id":"A"}, {"department":"X"}]"#);
        assert_eq!(s.courses.len(), 1);
        assert_eq!(
            s.message,
            Some(UserMessage::info(
                "Loaded 1 course(s). Skipped 1 invalid entry."
            ))
        );
    }

    #[test]
    fn test_failed_load_clears_collection() {
        for bad in ["", "   ", "{\"id\":1}", "[1,2]", "not json"] {
            let mut s = loaded(SAMPLE);
            let req = s.begin_load(Some(PathBuf::from("next.json"))).unwrap();
            s.finish_load(completion(req.generation, bad));
            assert!(s.courses.is_empty(), "{bad:?}");
            assert!(s.view.is_empty());
            assert_eq!(s.selected_id, None);
            assert_eq!(s.phase(), ViewPhase::NoFileLoaded);
            assert_eq!(s.message.as_ref().map(|m| m.kind), Some(MessageKind::Error));
        }
    }

    #[test]
    fn test_error_messages_per_failure() {
        let mut s = loaded(SAMPLE);
        let req = s.begin_load(Some(PathBuf::from("a.json"))).unwrap();
        s.finish_load(completion(req.generation, "{}"));
        assert_eq!(s.message.as_ref().unwrap().text, constants::MSG_INVALID_FORMAT);

        let req = s.begin_load(Some(PathBuf::from("a.json"))).unwrap();
        s.finish_load(completion(req.generation, "[{}]"));
        assert_eq!(s.message.as_ref().unwrap().text, constants::MSG_NO_VALID_COURSES);
    }

    #[test]
    fn test_wrong_extension_fails_synchronously() {
        let mut s = loaded(SAMPLE);
        assert_eq!(s.begin_load(Some(PathBuf::from("courses.csv"))), None);
        assert!(s.courses.is_empty());
        assert_eq!(s.file_name.as_deref(), Some("courses.csv"));
        assert_eq!(
            s.message,
            Some(UserMessage::error(constants::MSG_WRONG_FILE_TYPE))
        );
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut s = state();
        s.begin_load(Some(PathBuf::from("x.txt")));
        assert!(s.message.is_some());
        let req = s.begin_load(Some(PathBuf::from("y.json"))).unwrap();
        s.finish_load(completion(req.generation, SAMPLE));
        assert_eq!(s.message, None);
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut s = state();
        let first = s.begin_load(Some(PathBuf::from("a.json"))).unwrap();
        let second = s.begin_load(Some(PathBuf::from("b.json"))).unwrap();
        assert_eq!(s.loads_in_flight, 2);

        assert!(s.finish_load(completion(second.generation, r#"[{"id":"B"}]"#)));
        assert!(!s.finish_load(completion(first.generation, r#"[{"id":"A"}]"#)));
        assert_eq!(visible_ids(&s), vec!["B"]);
        assert_eq!(s.loads_in_flight, 0);
    }

    #[test]
    fn test_stale_completion_applied_when_configured() {
        let mut s = state();
        s.discard_stale_loads = false;
        let first = s.begin_load(Some(PathBuf::from("a.json"))).unwrap();
        let second = s.begin_load(Some(PathBuf::from("b.json"))).unwrap();

        s.finish_load(completion(second.generation, r#"[{"id":"B"}]"#));
        assert!(s.finish_load(completion(first.generation, r#"[{"id":"A"}]"#)));
        assert_eq!(visible_ids(&s), vec!["A"]);
    }

    #[test]
    fn test_wrong_extension_supersedes_pending_read() {
        let mut s = state();
        let first = s.begin_load(Some(PathBuf::from("a.json"))).unwrap();
        assert_eq!(s.begin_load(Some(PathBuf::from("b.txt"))), None);
        assert!(!s.finish_load(completion(first.generation, SAMPLE)));
        assert!(s.courses.is_empty());
    }

    #[test]
    fn test_facet_selection_preserved_across_reload() {
        let mut s = loaded(SAMPLE);
        s.set_filter(Facet::Department, "Math");
        s.set_filter(Facet::Instructor, "Kim");
        let req = s.begin_load(Some(PathBuf::from("again.json"))).unwrap();
        s.finish_load(completion(
            req.generation,
            r#"[{"id":"M1","department":"Math"},{"id":"C1","department":"CS"}]"#,
        ));
        assert_eq!(s.filter_state.get(Facet::Department), Some("Math"));
        assert_eq!(s.filter_state.get(Facet::Instructor), None);
        assert_eq!(visible_ids(&s), vec!["M1"]);
        assert_eq!(s.selected_id.as_deref(), Some("M1"));
    }

    #[test]
    fn test_reconcile_selection() {
        let courses = parse_courses(SAMPLE).unwrap().courses;
        assert_eq!(
            reconcile_selection(&courses, &[2, 0], Some("CS201")),
            Ok(Some("CS201".to_string()))
        );
        assert_eq!(
            reconcile_selection(&courses, &[2, 0], Some("CS101")),
            Ok(Some("MA110".to_string()))
        );
        assert_eq!(reconcile_selection(&courses, &[], Some("CS101")), Ok(None));
        assert_eq!(
            reconcile_selection(&courses, &[5], None),
            Err(ViewError::StaleIndex { index: 5, len: 3 })
        );
    }
}
