// CourseLens - core/collate.rs
//
// Locale-aware string ordering for sort modes and facet option lists.
//
// Follows the shape of the root Unicode collation order used by UI toolkits,
// compared level by level:
//   1. base characters: whitespace < punctuation/symbols < digits < letters,
//      with accents removed and case folded ("Études" sorts with "etudes")
//   2. accents: unaccented before accented
//   3. case: lowercase before uppercase
//   4. raw code points, so only identical strings compare `Equal`
// The total order keeps stable ascending and descending sorts exact mirrors.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Collation classes, in ascending order.
const CLASS_SPACE: u8 = 0;
const CLASS_PUNCT: u8 = 1;
const CLASS_DIGIT: u8 = 2;
const CLASS_LETTER: u8 = 3;

#[derive(Debug)]
struct Element {
    primary: (u8, u32),
    marks: Vec<char>,
    upper: bool,
}

/// Compare two strings for display ordering.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ea = elements(a);
    let eb = elements(b);

    ea.iter()
        .map(|e| e.primary)
        .cmp(eb.iter().map(|e| e.primary))
        .then_with(|| ea.iter().map(|e| &e.marks).cmp(eb.iter().map(|e| &e.marks)))
        .then_with(|| ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper)))
        .then_with(|| a.cmp(b))
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        let upper = c.is_uppercase();
        for folded in c.to_lowercase() {
            out.push(Element {
                primary: primary_weight(folded),
                marks: Vec::new(),
                upper,
            });
        }
    }
    out
}

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (CLASS_SPACE, c as u32)
    } else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        (CLASS_PUNCT, rank as u32)
    } else if !c.is_alphanumeric() {
        // Other symbols rank after the ASCII set.
        (CLASS_PUNCT, 0x100 + c as u32)
    } else if let Some(digit) = c.to_digit(10) {
        (CLASS_DIGIT, digit)
    } else {
        (CLASS_LETTER, c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("cs101", "CS101"), Ordering::Less);
    }

    #[test]
    fn test_equal_only_for_identical() {
        assert_eq!(locale_cmp("CS", "CS"), Ordering::Equal);
        assert_ne!(locale_cmp("CS", "Cs"), Ordering::Equal);
        assert_ne!(locale_cmp("e\u{301}", "\u{e9}"), Ordering::Equal);
    }

    #[test]
    fn test_digits_compare_textually() {
        assert_eq!(locale_cmp("100", "20"), Ordering::Less);
        assert_eq!(locale_cmp("3", "4"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base() {
        assert_eq!(locale_cmp("Études", "Zoology"), Ordering::Less);
        assert_eq!(locale_cmp("Études", "Economics"), Ordering::Greater);
        assert_eq!(locale_cmp("Ängste", "Biology"), Ordering::Less);
        assert_eq!(locale_cmp("Müller", "Mueller"), Ordering::Greater);
        assert_eq!(locale_cmp("Muller", "Müller"), Ordering::Less);
    }

    #[test]
    fn test_accent_outranks_case() {
        assert_eq!(locale_cmp("resume", "Resume"), Ordering::Less);
        assert_eq!(locale_cmp("Resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(locale_cmp("_intro", "1intro"), Ordering::Less);
        assert_eq!(locale_cmp("1intro", "intro"), Ordering::Less);
        assert_eq!(locale_cmp("CS_101", "CS-101"), Ordering::Less);
        assert_eq!(locale_cmp("CS-101", "CS101"), Ordering::Less);
        assert_eq!(locale_cmp("Data Science", "DataBase"), Ordering::Less);
    }

    #[test]
    fn test_sorting_a_mixed_list() {
        let mut departments = vec!["Zoology", "art", "Études", "CS", "Économie", "_misc"];
        departments.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(
            departments,
            vec!["_misc", "art", "CS", "Économie", "Études", "Zoology"]
        );
    }
}
