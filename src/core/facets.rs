// CourseLens - core/facets.rs
//
// Facet definitions and option-list building.
// A facet is one filterable dimension of a course. Option lists hold the
// distinct observed values, excluding absent values and defaults substituted
// during normalization, in locale-aware order.

use crate::core::collate::locale_cmp;
use crate::core::model::{Course, Measure};
use crate::util::constants;
use std::collections::HashSet;

/// A filterable course dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Department,
    Level,
    Credits,
    Instructor,
}

impl Facet {
    /// Returns all facets in display order.
    pub fn all() -> &'static [Facet] {
        &[
            Facet::Department,
            Facet::Level,
            Facet::Credits,
            Facet::Instructor,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Department => "Department",
            Facet::Level => "Level",
            Facet::Credits => "Credits",
            Facet::Instructor => "Instructor",
        }
    }

    /// The string a filter selection is compared against.
    ///
    /// Unset measures compare as "N/A" and an unassigned instructor as "TBA".
    pub fn match_value(&self, course: &Course) -> String {
        match self {
            Facet::Department => course.department.clone(),
            Facet::Level => course.level.to_string(),
            Facet::Credits => course.credits.to_string(),
            Facet::Instructor => course.display_instructor().to_string(),
        }
    }

    /// The value this course contributes to the facet's option list, if any.
    fn option_value(&self, course: &Course) -> Option<String> {
        let value = match self {
            Facet::Department => {
                (course.department != constants::DEFAULT_DEPARTMENT)
                    .then(|| course.department.clone())
            }
            Facet::Level => measure_option(&course.level),
            Facet::Credits => measure_option(&course.credits),
            Facet::Instructor => course.instructor.clone(),
        }?;
        if value.is_empty() || value == constants::MEASURE_UNSET {
            return None;
        }
        Some(value)
    }
}

fn measure_option(measure: &Measure) -> Option<String> {
    measure.is_set().then(|| measure.to_string())
}

/// Build the deduplicated, locale-sorted option list for one facet.
pub fn build_options(courses: &[Course], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options: Vec<String> = courses
        .iter()
        .filter_map(|c| facet.option_value(c))
        .filter(|v| seen.insert(v.clone()))
        .collect();
    options.sort_by(|a, b| locale_cmp(a, b));
    options
}

/// Option lists for every facet, rebuilt wholesale on each load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub department: Vec<String>,
    pub level: Vec<String>,
    pub credits: Vec<String>,
    pub instructor: Vec<String>,
}

impl FacetOptions {
    pub fn build(courses: &[Course]) -> Self {
        Self {
            department: build_options(courses, Facet::Department),
            level: build_options(courses, Facet::Level),
            credits: build_options(courses, Facet::Credits),
            instructor: build_options(courses, Facet::Instructor),
        }
    }

    pub fn get(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Department => &self.department,
            Facet::Level => &self.level,
            Facet::Credits => &self.credits,
            Facet::Instructor => &self.instructor,
        }
    }

    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.get(facet).iter().any(|v| v == value)
    }
}
