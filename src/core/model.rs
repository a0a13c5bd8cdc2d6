// CourseLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::core::semester::{self, NormalizedSemester};
use crate::util::constants;
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Course
// =============================================================================

/// A single course record after validation and normalization.
///
/// Every field is populated: missing or unusable source values have already
/// been replaced by defaults. `instructor` is the one exception and stays
/// `None` so the "TBA" display rule can tell an unassigned instructor apart
/// from a real name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Selection key. Expected to be unique but not enforced.
    pub id: String,

    pub title: String,

    pub department: String,

    /// Course level (e.g. 100, 200). `Unset` if missing or not finite.
    pub level: Measure,

    /// Credit count. `Unset` if missing or not finite.
    pub credits: Measure,

    /// Assigned instructor, `None` when absent or empty.
    pub instructor: Option<String>,

    pub description: String,

    /// Free-form "Term Year" string, e.g. "Fall 2024".
    pub semester: String,

    pub skill: String,
}

impl Course {
    /// Instructor name for display, "TBA" when unassigned.
    pub fn display_instructor(&self) -> &str {
        self.instructor
            .as_deref()
            .unwrap_or(constants::INSTRUCTOR_TBA)
    }

    /// `(year, term)` pair used for chronological ordering.
    pub fn normalized_semester(&self) -> NormalizedSemester {
        semester::normalize(&self.semester)
    }

    /// One-line summary used for debug logging and list tooltips.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({}, level {})",
            self.id, self.title, self.department, self.level
        )
    }

    /// Ordered label/value pairs for the detail view.
    pub fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Department", self.department.clone()),
            ("Level", self.level.to_string()),
            ("Credits", self.credits.to_string()),
            ("Instructor", self.display_instructor().to_string()),
            ("Semester / Posted Time", self.semester.clone()),
            ("Skill", self.skill.clone()),
            ("Details", self.description.clone()),
        ]
    }

    /// Plain-text rendering of the detail view, for the clipboard.
    pub fn detail_report(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str(&self.id);
        out.push('\n');
        for (label, value) in self.detail_fields() {
            out.push_str(label);
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        }
        out
    }
}

// =============================================================================
// Measure
// =============================================================================

/// A numeric course attribute that may be absent.
///
/// Replaces a display-string sentinel: `Unset` never takes part in numeric
/// comparison and is excluded from facet options, but still renders as "N/A"
/// so it can be matched as an opaque string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measure {
    /// A finite number.
    Value(f64),

    /// Missing, non-numeric, or non-finite in the source record.
    #[default]
    Unset,
}

impl Measure {
    /// Build from a float, mapping NaN and infinities to `Unset`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Measure::Value(value)
        } else {
            Measure::Unset
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Measure::Value(_))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Value(v) => f.write_str(&format_number(*v)),
            Measure::Unset => f.write_str(constants::MEASURE_UNSET),
        }
    }
}

/// Unset serialises as `null` so exported files reload to the same course.
impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measure::Value(v) => serializer.serialize_f64(*v),
            Measure::Unset => serializer.serialize_none(),
        }
    }
}

/// Render a number the way it reads in the source file: shortest
/// round-trip digits, integral values without a trailing ".0", negative zero
/// as "0", and exponent notation ("1e+21", "1e-7") outside 1e-6..1e21.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
