//! Form validation helpers
//!
//! The login form applies required-field validation only. There are no
//! format or strength rules: whether a credential pair is acceptable is the
//! server's call, not the client's.

use crate::models::Credentials;

/// Field-presence check for the login form. Returns one message per missing
/// field, in display order.
pub fn validate_credentials(credentials: &Credentials) -> Vec<String> {
    let mut errors = Vec::new();

    if credentials.username.trim().is_empty() {
        errors.push("Username is required".to_string());
    }
    if credentials.password.is_empty() {
        errors.push("Password is required".to_string());
    }

    errors
}

/// True when every required field is present.
pub fn credentials_complete(credentials: &Credentials) -> bool {
    validate_credentials(credentials).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_credentials_pass() {
        let credentials = Credentials::new("reader", "secret");
        assert!(validate_credentials(&credentials).is_empty());
        assert!(credentials_complete(&credentials));
    }

    #[test]
    fn missing_username_is_reported() {
        let credentials = Credentials::new("", "secret");
        let errors = validate_credentials(&credentials);
        assert_eq!(errors, vec!["Username is required".to_string()]);
        assert!(!credentials_complete(&credentials));
    }

    #[test]
    fn missing_password_is_reported() {
        let credentials = Credentials::new("reader", "");
        let errors = validate_credentials(&credentials);
        assert_eq!(errors, vec!["Password is required".to_string()]);
    }

    #[test]
    fn both_fields_missing_reports_both() {
        let errors = validate_credentials(&Credentials::default());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn whitespace_only_username_counts_as_missing() {
        let credentials = Credentials::new("   ", "secret");
        assert!(!credentials_complete(&credentials));
    }

    #[test]
    fn no_strength_rules_apply() {
        // A one-character password is fine as far as the client is concerned.
        let credentials = Credentials::new("reader", "x");
        assert!(credentials_complete(&credentials));
    }
}
