//! FILENAME: core/engine/src/validation.rs
//! PURPOSE: Format checks applied to the entry form on submission.
//! CONTEXT: Number is checked before location, and only the first failure is reported.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::record::{EntryForm, NewContainer};

/// Exact length of a container number.
pub const NUMBER_LEN: usize = 4;

static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}$").expect("location pattern is valid"));

/// Rejected entry form. Names the single field that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Container number must have 4 digits!")]
    InvalidNumber,

    #[error("Location must follow the format '000-000'!")]
    InvalidLocation,
}

/// True iff `s` is exactly four ASCII digits. Leading zeros are fine.
pub fn validate_number(s: &str) -> bool {
    s.len() == NUMBER_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `s` is exactly `DDD-DDD`.
pub fn validate_location(s: &str) -> bool {
    LOCATION_RE.is_match(s)
}

/// Validate a submitted form. The tag is free text and never checked.
pub fn validate_entry(form: &EntryForm) -> Result<NewContainer, ValidationError> {
    if !validate_number(&form.number) {
        return Err(ValidationError::InvalidNumber);
    }
    if !validate_location(&form.location) {
        return Err(ValidationError::InvalidLocation);
    }
    Ok(NewContainer::from_checked(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_accepts_four_digits() {
        assert!(validate_number("1234"));
        assert!(validate_number("0000"));
        assert!(validate_number("0042"));
    }

    #[test]
    fn test_number_rejects_wrong_shape() {
        assert!(!validate_number("12a4"));
        assert!(!validate_number("123"));
        assert!(!validate_number("12345"));
        assert!(!validate_number(""));
        assert!(!validate_number("12-4"));
        assert!(!validate_number(" 123"));
    }

    #[test]
    fn test_number_rejects_non_ascii_digits() {
        // Arabic-Indic digits are decimal digits, but not ASCII
        assert!(!validate_number("١٢٣٤"));
    }

    #[test]
    fn test_location_accepts_pattern() {
        assert!(validate_location("123-456"));
        assert!(validate_location("000-000"));
    }

    #[test]
    fn test_location_rejects_wrong_shape() {
        assert!(!validate_location("123456"));
        assert!(!validate_location("12-3456"));
        assert!(!validate_location("123-45"));
        assert!(!validate_location("123-4567"));
        assert!(!validate_location("abc-def"));
        assert!(!validate_location("123-456\n"));
        assert!(!validate_location(""));
    }

    #[test]
    fn test_entry_checks_number_first() {
        let form = EntryForm::new("12", "Blue", "bad");
        assert_eq!(validate_entry(&form), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_entry_reports_location() {
        let form = EntryForm::new("1234", "Blue", "12-3456");
        assert_eq!(validate_entry(&form), Err(ValidationError::InvalidLocation));
    }

    #[test]
    fn test_entry_allows_empty_tag() {
        let checked = validate_entry(&EntryForm::new("4521", "", "100-200")).unwrap();
        assert_eq!(checked.number(), "4521");
        assert_eq!(checked.tag(), "");
        assert_eq!(checked.location(), "100-200");
    }
}
