// CourseLens - core/filter.rs
//
// Facet filter engine for courses.
// All active facet selections are AND-combined; an unset facet ("All")
// always matches. Facets never constrain one another's option lists.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::facets::{Facet, FacetOptions};
use crate::core::model::Course;

/// Current facet selections. `None` is the unrestricted "All" choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact department match.
    pub department: Option<String>,

    /// Level compared as its display string.
    pub level: Option<String>,

    /// Credits compared as its display string.
    pub credits: Option<String>,

    /// Instructor compared against the display value ("TBA" when unassigned).
    pub instructor: Option<String>,
}

impl FilterState {
    /// Returns true if no facet is restricted.
    pub fn is_empty(&self) -> bool {
        Facet::all().iter().all(|f| self.get(*f).is_none())
    }

    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.slot(facet).as_deref()
    }

    /// Select a value for a facet. An empty string selects "All".
    pub fn set(&mut self, facet: Facet, value: &str) {
        *self.slot_mut(facet) = (!value.is_empty()).then(|| value.to_string());
    }

    /// Reset a facet to "All".
    pub fn clear(&mut self, facet: Facet) {
        *self.slot_mut(facet) = None;
    }

    /// Keep each selection that still exists in `options`; reset the rest
    /// to "All". Returns the facets that were reset.
    pub fn retain_available(&mut self, options: &FacetOptions) -> Vec<Facet> {
        let mut reset = Vec::new();
        for facet in Facet::all() {
            let stale = self
                .get(*facet)
                .is_some_and(|value| !options.contains(*facet, value));
            if stale {
                self.clear(*facet);
                reset.push(*facet);
            }
        }
        reset
    }

    fn slot(&self, facet: Facet) -> &Option<String> {
        match facet {
            Facet::Department => &self.department,
            Facet::Level => &self.level,
            Facet::Credits => &self.credits,
            Facet::Instructor => &self.instructor,
        }
    }

    fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::Department => &mut self.department,
            Facet::Level => &mut self.level,
            Facet::Credits => &mut self.credits,
            Facet::Instructor => &mut self.instructor,
        }
    }
}

/// Apply filters to a slice of courses, returning indices of matching courses
/// in their original order.
pub fn apply_filters(courses: &[Course], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..courses.len()).collect();
    }

    courses
        .iter()
        .enumerate()
        .filter(|(_, course)| matches_all(course, filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single course matches every restricted facet.
fn matches_all(course: &Course, filter: &FilterState) -> bool {
    Facet::all().iter().all(|facet| match filter.get(*facet) {
        Some(wanted) => facet.match_value(course) == wanted,
        None => true,
    })
}
