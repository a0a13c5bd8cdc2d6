// CourseLens - core/sort.rs
//
// Sort engine. Every mode uses a stable sort, so ties (and the `None` mode)
// keep the incoming order. Never mutates its input.

use crate::core::collate::locale_cmp;
use crate::core::model::Course;
use crate::util::error::ViewError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How the course list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Keep the order of the source file.
    #[default]
    None,
    IdAsc,
    IdDesc,
    TitleAsc,
    TitleDesc,
    /// Oldest semester first.
    SemEarliest,
    /// Newest semester first.
    SemLatest,
}

impl SortMode {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::None,
            SortMode::IdAsc,
            SortMode::IdDesc,
            SortMode::TitleAsc,
            SortMode::TitleDesc,
            SortMode::SemEarliest,
            SortMode::SemLatest,
        ]
    }

    /// Stable identifier used on the command line and in config.toml.
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::IdAsc => "id-asc",
            SortMode::IdDesc => "id-desc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::SemEarliest => "sem-earliest",
            SortMode::SemLatest => "sem-latest",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "File order",
            SortMode::IdAsc => "ID (A\u{2192}Z)",
            SortMode::IdDesc => "ID (Z\u{2192}A)",
            SortMode::TitleAsc => "Title (A\u{2192}Z)",
            SortMode::TitleDesc => "Title (Z\u{2192}A)",
            SortMode::SemEarliest => "Semester (earliest first)",
            SortMode::SemLatest => "Semester (latest first)",
        }
    }

    /// Compare two courses under this mode.
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortMode::None => Ordering::Equal,
            SortMode::IdAsc => locale_cmp(&a.id, &b.id),
            SortMode::IdDesc => locale_cmp(&b.id, &a.id),
            SortMode::TitleAsc => locale_cmp(&a.title, &b.title),
            SortMode::TitleDesc => locale_cmp(&b.title, &a.title),
            SortMode::SemEarliest => a.normalized_semester().cmp(&b.normalized_semester()),
            SortMode::SemLatest => b.normalized_semester().cmp(&a.normalized_semester()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortMode::all()
            .iter()
            .copied()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = SortMode::all().iter().map(|m| m.key()).collect();
                format!(
                    "unknown sort mode '{s}'. Valid values: {}",
                    valid.join(", ")
                )
            })
    }
}

/// Reorder a filtered view (indices into `courses`) under `mode`.
///
/// Fails if any index does not resolve into `courses`.
pub fn sort_indices(
    courses: &[Course],
    indices: &[usize],
    mode: SortMode,
) -> Result<Vec<usize>, ViewError> {
    let mut resolved = indices
        .iter()
        .map(|&idx| {
            courses
                .get(idx)
                .map(|course| (idx, course))
                .ok_or(ViewError::StaleIndex {
                    index: idx,
                    len: courses.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if mode != SortMode::None {
        resolved.sort_by(|(_, a), (_, b)| mode.compare(a, b));
    }
    Ok(resolved.into_iter().map(|(idx, _)| idx).collect())
}
