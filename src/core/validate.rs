// CourseLens - core/validate.rs
//
// Admission checks on raw JSON records, run before normalization.
// Deliberately minimal: only records with nothing to identify them are
// rejected. Type mismatches on other fields are left to the normalizer.

use serde_json::Value;
use std::fmt;

/// Why a raw record was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The record is not a JSON object (includes `null`).
    NotAnObject,

    /// Neither `id` nor `title` carries a usable value.
    MissingIdentity,
}

impl Rejection {
    /// Stable human-readable reason, used in load diagnostics.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NotAnObject => "Item is not a valid object.",
            Rejection::MissingIdentity => {
                "Missing both 'id' and 'title'. At least one is required."
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of validating one raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected(Rejection),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Accepted)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Validation::Accepted => None,
            Validation::Rejected(r) => Some(r.reason()),
        }
    }
}

/// Validate one raw record. Pure; callers collect the reasons.
pub fn validate(raw: &Value) -> Validation {
    let Some(object) = raw.as_object() else {
        return Validation::Rejected(Rejection::NotAnObject);
    };

    let has_id = object.get("id").is_some_and(is_truthy);
    let has_title = object.get("title").is_some_and(is_truthy);
    if !has_id && !has_title {
        return Validation::Rejected(Rejection::MissingIdentity);
    }

    Validation::Accepted
}

/// Whether a JSON value counts as "present".
///
/// `null`, `false`, `0` and `""` are absent; every other value, including
/// empty arrays and objects, is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // `as_f64` is None only for literals beyond f64 range, i.e. infinities.
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Short article-prefixed name of a JSON value's kind, for messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_objects_rejected() {
        for raw in [json!(null), json!(42), json!("CS101"), json!([1, 2]), json!(true)] {
            assert_eq!(
                validate(&raw),
                Validation::Rejected(Rejection::NotAnObject),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_missing_id_and_title_rejected_with_stable_reason() {
        for raw in [
            json!({}),
            json!({"department": "CS"}),
            json!({"id": "", "title": ""}),
            json!({"id": null, "title": null}),
            json!({"id": 0, "title": false}),
        ] {
            let v = validate(&raw);
            assert!(!v.is_valid(), "{raw}");
            assert_eq!(
                v.reason(),
                Some("Missing both 'id' and 'title'. At least one is required.")
            );
        }
    }

    #[test]
    fn test_either_identity_field_suffices() {
        assert!(validate(&json!({"id": "CS101"})).is_valid());
        assert!(validate(&json!({"title": "NoID"})).is_valid());
        assert!(validate(&json!({"id": 101})).is_valid());
    }

    #[test]
    fn test_type_mismatches_tolerated() {
        let raw = json!({"id": "X", "level": "high", "credits": [3], "instructor": 7});
        assert_eq!(validate(&raw), Validation::Accepted);
        assert_eq!(validate(&raw).reason(), None);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&json!({})), "an object");
        assert_eq!(kind_name(&json!(null)), "null");
    }
}
