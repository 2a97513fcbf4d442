//! Field checks for loosely typed JSON request bodies.
//!
//! Request structs keep each field as an optional [`serde_json::Value`] so a
//! wrong-typed field never fails the whole decode. [`FieldCheck`] then turns
//! the values into typed data and records every field it rejects.

use serde_json::Value;

/// Why a request field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// Absent, null or blank.
    Required,
    /// Present but of the wrong type or out of range.
    Invalid,
}

impl FieldIssue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldIssue::Required => "required",
            FieldIssue::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub issue: FieldIssue,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            issue: FieldIssue::Required,
        }
    }

    pub fn invalid(field: &'static str) -> Self {
        Self {
            field,
            issue: FieldIssue::Invalid,
        }
    }
}

/// Collects field errors in the order fields are checked.
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: Vec<FieldError>,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed, non-blank text.
    pub fn required_text(&mut self, field: &'static str, value: Option<Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => self.reject(FieldError::required(field)),
            Some(Value::String(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    self.reject(FieldError::required(field))
                } else {
                    Some(text.to_string())
                }
            }
            Some(_) => self.reject(FieldError::invalid(field)),
        }
    }

    /// Trimmed text, empty when absent or null.
    pub fn optional_text(&mut self, field: &'static str, value: Option<Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.trim().to_string(),
            Some(_) => {
                self.errors.push(FieldError::invalid(field));
                String::new()
            }
        }
    }

    /// JSON boolean, `false` when absent or null.
    pub fn flag(&mut self, field: &'static str, value: Option<Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => flag,
            Some(_) => {
                self.errors.push(FieldError::invalid(field));
                false
            }
        }
    }

    /// Positive integer id, given as a JSON number or as numeric text.
    ///
    /// Zero and blank text count as missing; anything else that is not a
    /// positive integer is invalid.
    pub fn positive_id(&mut self, field: &'static str, value: Option<Value>) -> Option<i64> {
        let parsed = match value {
            None | Some(Value::Null) => return self.reject(FieldError::required(field)),
            Some(Value::Number(number)) => number.as_i64(),
            Some(Value::String(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return self.reject(FieldError::required(field));
                }
                text.parse::<i64>().ok()
            }
            Some(_) => None,
        };

        match parsed {
            Some(id) if id > 0 => Some(id),
            Some(0) => self.reject(FieldError::required(field)),
            _ => self.reject(FieldError::invalid(field)),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    fn reject<T>(&mut self, error: FieldError) -> Option<T> {
        self.errors.push(error);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_is_trimmed_and_blank_is_required() {
        let mut check = FieldCheck::new();
        assert_eq!(check.required_text("name", Some(json!("  Rex "))), Some("Rex".into()));
        assert_eq!(check.required_text("species", Some(json!("   "))), None);
        assert_eq!(check.required_text("age", None), None);
        assert_eq!(check.required_text("size", Some(json!(5))), None);
        assert_eq!(check.optional_text("city", None), "");

        assert_eq!(
            check.into_errors(),
            vec![
                FieldError::required("species"),
                FieldError::required("age"),
                FieldError::invalid("size"),
            ]
        );
    }

    #[test]
    fn flags_accept_only_booleans() {
        let mut check = FieldCheck::new();
        assert!(check.flag("vaccinated", Some(json!(true))));
        assert!(!check.flag("good_with_kids", Some(Value::Null)));
        assert!(!check.flag("good_with_kids", Some(json!("yes"))));
        assert_eq!(check.into_errors(), vec![FieldError::invalid("good_with_kids")]);
    }

    #[test]
    fn ids_accept_numbers_and_numeric_text() {
        let mut check = FieldCheck::new();
        assert_eq!(check.positive_id("pet_id", Some(json!(3))), Some(3));
        assert_eq!(check.positive_id("pet_id", Some(json!(" 3 "))), Some(3));
        assert!(check.is_clean());

        assert_eq!(check.positive_id("a", Some(json!(""))), None);
        assert_eq!(check.positive_id("b", Some(json!(0))), None);
        assert_eq!(check.positive_id("c", Some(json!("three"))), None);
        assert_eq!(check.positive_id("d", Some(json!(-4))), None);
        assert_eq!(check.positive_id("e", Some(json!(2.5))), None);

        let issues: Vec<_> = check
            .into_errors()
            .into_iter()
            .map(|e| (e.field, e.issue.as_str()))
            .collect();
        assert_eq!(
            issues,
            vec![
                ("a", "required"),
                ("b", "required"),
                ("c", "invalid"),
                ("d", "invalid"),
                ("e", "invalid"),
            ]
        );
    }
}
