//! Creation form validation.
//!
//! Validation runs synchronously on submit, before any network call, and
//! collects every field violation at once rather than failing fast.

/// Field-scoped validation messages for the creation form.
///
/// A `Some` field holds the message to display beneath that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub code: Option<String>,
    pub emoji: Option<String>,
}

impl FieldErrors {
    /// True when no field has a violation.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.emoji.is_none()
    }

    /// Number of fields with a violation.
    #[cfg(test)]
    pub fn count(&self) -> usize {
        [&self.name, &self.code, &self.emoji]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Validate the creation form's fields.
///
/// Name and emoji are required non-empty after trimming. Code is required
/// and must be exactly two characters.
pub fn validate_new_country(name: &str, code: &str, emoji: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if code.trim().is_empty() {
        errors.code = Some("Code is required".to_string());
    } else if code.chars().count() != 2 {
        errors.code = Some("Code must be exactly 2 characters".to_string());
    }
    if emoji.trim().is_empty() {
        errors.emoji = Some("Emoji is required".to_string());
    }

    errors
}

/// Normalize the code field as the user types: codes are always upper case.
pub fn normalize_code(raw: &str) -> String {
    raw.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_violations_collected_at_once() {
        let errors = validate_new_country("", "FRA", "");
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(
            errors.code.as_deref(),
            Some("Code must be exactly 2 characters")
        );
        assert_eq!(errors.emoji.as_deref(), Some("Emoji is required"));
    }

    #[test]
    fn test_code_length_is_the_only_violation() {
        let errors = validate_new_country("France", "F", "🇫🇷");
        assert_eq!(errors.count(), 1);
        assert_eq!(
            errors.code.as_deref(),
            Some("Code must be exactly 2 characters")
        );
    }

    #[test]
    fn test_missing_code_reports_required_not_length() {
        let errors = validate_new_country("France", "  ", "🇫🇷");
        assert_eq!(errors.code.as_deref(), Some("Code is required"));
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let errors = validate_new_country("   ", "FR", "🇫🇷");
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_valid_fields_produce_no_violations() {
        let errors = validate_new_country("France", "FR", "🇫🇷");
        assert!(errors.is_empty());
        assert_eq!(errors.count(), 0);
    }

    #[test]
    fn test_code_is_upper_cased_as_typed() {
        assert_eq!(normalize_code("fr"), "FR");
        assert_eq!(normalize_code("Fr"), "FR");
        assert_eq!(normalize_code("FR"), "FR");
    }
}
