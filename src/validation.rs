// src/validation.rs
//! Contact-field validation applied before a version append. Both checks
//! apply only when the field is non-empty; a resume without contact
//! details is still storable.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ApiError;

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn mobile_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // 10-digit Indian mobile, leading digit 6-9
    RE.get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").expect("mobile pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Non-digit characters (spaces, dashes) are stripped before the pattern
/// check; a country prefix still fails the 10-digit rule.
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    mobile_pattern().is_match(&digits)
}

/// Validate the contact fields of a submitted version. Fails only on
/// present-and-invalid values.
pub fn validate_contact(email: &str, phone: &str) -> Result<(), ApiError> {
    if !email.is_empty() && !is_valid_email(email) {
        return Err(ApiError::validation("Invalid email address"));
    }

    if !phone.is_empty() && !is_valid_indian_mobile(phone) {
        return Err(ApiError::validation(
            "Invalid mobile number. Expecting 10-digit Indian mobile starting with 6-9.",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.in"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_indian_mobile("9876543210"));
        assert!(is_valid_indian_mobile("98765-43210"));
        // leading digit must be 6-9
        assert!(!is_valid_indian_mobile("1234567890"));
        assert!(!is_valid_indian_mobile("98765"));
    }

    #[test]
    fn test_empty_fields_pass() {
        assert!(validate_contact("", "").is_ok());
    }

    #[test]
    fn test_present_and_invalid_fails() {
        assert!(validate_contact("bad", "").is_err());
        assert!(validate_contact("", "1234567890").is_err());
        assert!(validate_contact("asha@example.com", "9876543210").is_ok());
    }
}
