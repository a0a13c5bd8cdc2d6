// CourseLens - core/semester.rs
//
// "Term Year" strings (e.g. "Fall 2024") reduced to a sortable
// (year, term) pair. Anything unrecognised collapses towards (0, 0).

/// Academic terms in calendar order within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Winter = 1,
    Spring = 2,
    Summer = 3,
    Fall = 4,
}

impl Term {
    /// Exact, case-sensitive match on the term name.
    pub fn from_name(name: &str) -> Option<Term> {
        match name {
            "Winter" => Some(Term::Winter),
            "Spring" => Some(Term::Spring),
            "Summer" => Some(Term::Summer),
            "Fall" => Some(Term::Fall),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Chronological sort key. Field order gives lexicographic `Ord`:
/// year first, then term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NormalizedSemester {
    pub year: i64,
    /// 0 for an unrecognised term, 1..=4 for Winter..Fall.
    pub term_index: u8,
}

/// Normalize a semester string.
///
/// The string is split on single spaces; the first piece names the term and
/// the second carries the year. The year is read from its leading integer
/// digits ("2024x" reads as 2024); a missing or unreadable year is 0, as is
/// an unknown term.
pub fn normalize(semester: &str) -> NormalizedSemester {
    let mut parts = semester.split(' ');
    let term = parts.next().unwrap_or("");
    let year = parts.next().map(leading_int).unwrap_or(0);

    NormalizedSemester {
        year,
        term_index: Term::from_name(term).map(Term::index).unwrap_or(0),
    }
}

/// Parse an optionally signed integer prefix after leading whitespace.
/// Returns 0 when no digits are present. Saturates instead of overflowing.
fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sem(year: i64, term_index: u8) -> NormalizedSemester {
        NormalizedSemester { year, term_index }
    }

    #[test]
    fn test_recognised_terms() {
        assert_eq!(normalize("Winter 2024"), sem(2024, 1));
        assert_eq!(normalize("Spring 2024"), sem(2024, 2));
        assert_eq!(normalize("Summer 2024"), sem(2024, 3));
        assert_eq!(normalize("Fall 2024"), sem(2024, 4));
    }

    #[test]
    fn test_chronological_order() {
        assert!(normalize("Winter 2024") < normalize("Fall 2024"));
        assert!(normalize("Fall 2024") < normalize("Winter 2025"));
    }

    #[test]
    fn test_malformed_maps_to_zero() {
        assert_eq!(normalize("Q1"), sem(0, 0));
        assert_eq!(normalize(""), sem(0, 0));
        assert_eq!(normalize("Unknown Semester"), sem(0, 0));
        assert!(normalize("Q1") < normalize("Winter 1900"));
    }

    #[test]
    fn test_partial_values() {
        // Unknown term keeps its year; lowercase term names are not recognised.
        assert_eq!(normalize("Autumn 2023"), sem(2023, 0));
        assert_eq!(normalize("fall 2023"), sem(2023, 0));
        // Year parsing stops at the first non-digit.
        assert_eq!(normalize("Fall 2023b"), sem(2023, 4));
        // A double space leaves the year piece empty.
        assert_eq!(normalize("Fall  2023"), sem(0, 4));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42"), 42);
        assert_eq!(leading_int("-7"), -7);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int("99999999999999999999999"), i64::MAX);
    }
}
