// CourseLens - core/normalize.rs
//
// Builds a well-formed `Course` from an accepted raw JSON record.
//
// Each field goes through presence check -> type check -> default.
// String fields treat null, false, 0 and "" as absent; numbers and `true`
// are stringified; arrays and objects fall back to the default.
// Numeric fields accept JSON numbers and numeric strings that parse to a
// finite value; everything else becomes `Measure::Unset`.

use crate::core::model::{format_number, Course, Measure};
use crate::core::validate::{is_truthy, kind_name};
use crate::util::constants;
use crate::util::error::NormalizeError;
use serde_json::{Map, Value};

/// Normalize one raw record into a Course.
///
/// Never panics. The only failure is a non-object record, which the
/// validator already rejects; callers turn it into a per-entry diagnostic.
pub fn normalize(raw: &Value) -> Result<Course, NormalizeError> {
    let object = raw.as_object().ok_or(NormalizeError::NotAnObject {
        found: kind_name(raw),
    })?;

    Ok(Course {
        id: text_or(object, "id", constants::DEFAULT_ID),
        title: text_or(object, "title", constants::DEFAULT_TITLE),
        department: text_or(object, "department", constants::DEFAULT_DEPARTMENT),
        level: measure(object, "level"),
        credits: measure(object, "credits"),
        instructor: text(object, "instructor"),
        description: text_or(object, "description", constants::DEFAULT_DESCRIPTION),
        semester: text_or(object, "semester", constants::DEFAULT_SEMESTER),
        skill: text_or(object, "skill", constants::DEFAULT_SKILL),
    })
}

impl TryFrom<&Value> for Course {
    type Error = NormalizeError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

fn text_or(object: &Map<String, Value>, key: &str, default: &str) -> String {
    text(object, key).unwrap_or_else(|| default.to_string())
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    let value = object.get(key).filter(|v| is_truthy(v))?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            // Out-of-range literals keep their text, which reads as +/-inf.
            _ => format_number(
                n.as_f64()
                    .unwrap_or_else(|| n.to_string().parse().unwrap_or(f64::NAN)),
            ),
        }),
        Value::Bool(_) => Some("true".to_string()),
        _ => None,
    }
}

fn measure(object: &Map<String, Value>, key: &str) -> Measure {
    match object.get(key) {
        Some(Value::Number(n)) => n.as_f64().map_or(Measure::Unset, Measure::from_f64),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Measure::Unset;
            }
            trimmed
                .parse::<f64>()
                .map_or(Measure::Unset, Measure::from_f64)
        }
        _ => Measure::Unset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let raw = json!({
            "id": "CS101",
            "title": "Intro",
            "department": "CS",
            "level": 100,
            "credits": 3,
            "instructor": "Dr. Lee",
            "description": "Basics.",
            "semester": "Fall 2024",
            "skill": "Programming"
        });
        let course = normalize(&raw).unwrap();
        assert_eq!(course.id, "CS101");
        assert_eq!(course.level, Measure::Value(100.0));
        assert_eq!(course.credits, Measure::Value(3.0));
        assert_eq!(course.instructor.as_deref(), Some("Dr. Lee"));
        assert_eq!(course.skill, "Programming");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let course = normalize(&json!({"title": "NoID"})).unwrap();
        assert_eq!(course.id, constants::DEFAULT_ID);
        assert_eq!(course.department, constants::DEFAULT_DEPARTMENT);
        assert_eq!(course.semester, constants::DEFAULT_SEMESTER);
        assert_eq!(course.description, constants::DEFAULT_DESCRIPTION);
        assert_eq!(course.skill, constants::DEFAULT_SKILL);
        assert_eq!(course.level, Measure::Unset);
        assert_eq!(course.credits, Measure::Unset);
        assert_eq!(course.instructor, None);
    }

    #[test]
    fn test_empty_strings_take_defaults() {
        let course =
            normalize(&json!({"id": "X", "title": "", "instructor": "", "skill": null})).unwrap();
        assert_eq!(course.title, constants::DEFAULT_TITLE);
        assert_eq!(course.instructor, None);
        assert_eq!(course.skill, constants::DEFAULT_SKILL);
    }

    #[test]
    fn test_non_finite_and_non_numeric_measures_are_unset() {
        for bad in [
            json!("high"),
            json!("NaN"),
            json!("Infinity"),
            json!("-inf"),
            json!(""),
            json!("   "),
            json!(null),
            json!(true),
            json!([200]),
            json!({"n": 1}),
        ] {
            let course = normalize(&json!({"id": "X", "level": bad, "credits": bad})).unwrap();
            assert_eq!(course.level, Measure::Unset, "level {bad}");
            assert_eq!(course.credits, Measure::Unset, "credits {bad}");
        }
    }

    #[test]
    fn test_out_of_range_literals_do_not_fail() {
        let raw: Value = serde_json::from_str(
            r#"{"id": 1e400, "title": -1e999, "level": 1e400, "credits": -1e999}"#,
        )
        .unwrap();
        let course = normalize(&raw).unwrap();
        assert_eq!(course.level, Measure::Unset);
        assert_eq!(course.credits, Measure::Unset);
        assert_eq!(course.id, "Infinity");
        assert_eq!(course.title, "-Infinity");
    }

    #[test]
    fn test_large_integers_use_exponent_form() {
        let raw: Value =
            serde_json::from_str(r#"{"id": 20000000000000000000000000, "level": 1e21}"#).unwrap();
        let course = normalize(&raw).unwrap();
        assert_eq!(course.id, "2e+25");
        assert_eq!(course.level.to_string(), "1e+21");
    }

    #[test]
    fn test_numeric_strings_coerced() {
        let course = normalize(&json!({"id": "X", "level": " 200 ", "credits": "1.5"})).unwrap();
        assert_eq!(course.level, Measure::Value(200.0));
        assert_eq!(course.credits, Measure::Value(1.5));
    }

    #[test]
    fn test_scalar_identity_values_stringified() {
        let course = normalize(&json!({"id": 101, "title": 2.5, "department": true})).unwrap();
        assert_eq!(course.id, "101");
        assert_eq!(course.title, "2.5");
        assert_eq!(course.department, "true");

        let course = normalize(&json!({"id": {"x": 1}, "title": ["a"]})).unwrap();
        assert_eq!(course.id, constants::DEFAULT_ID);
        assert_eq!(course.title, constants::DEFAULT_TITLE);
    }

    #[test]
    fn test_non_object_is_an_error_not_a_panic() {
        assert_eq!(
            normalize(&json!([1])),
            Err(NormalizeError::NotAnObject { found: "an array" })
        );
        assert!(Course::try_from(&json!(null)).is_err());
    }
}
