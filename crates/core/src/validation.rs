//! Field-level checks shared by the create/update DTOs.

use crate::error::CoreError;

/// Trim `value` and reject it when nothing is left.
///
/// Returns the trimmed string so callers store the normalized form.
pub fn require_non_blank(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Like [`require_non_blank`] but for partial updates: `None` passes through.
pub fn optional_non_blank(field: &str, value: Option<&str>) -> Result<Option<String>, CoreError> {
    value.map(|v| require_non_blank(field, v)).transpose()
}

/// Collapse a blank optional string to `None`.
pub fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(require_non_blank("title", "  Hero  ").unwrap(), "Hero");
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let err = require_non_blank("title", " \t\n").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "title must not be empty");
    }

    #[test]
    fn optional_none_passes_through() {
        assert_eq!(optional_non_blank("label", None).unwrap(), None);
        assert!(optional_non_blank("label", Some("   ")).is_err());
    }

    #[test]
    fn blank_optional_becomes_none() {
        assert_eq!(blank_to_none(Some("  ")), None);
        assert_eq!(blank_to_none(Some(" qq:123 ")), Some("qq:123".to_string()));
        assert_eq!(blank_to_none(None), None);
    }
}
