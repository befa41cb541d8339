use super::*;

#[test]
fn validate_registration_input_accepts_matching_passwords() {
    assert_eq!(
        validate_registration_input(" ada@example.com ", "hunter22", "hunter22"),
        Ok(("ada@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_registration_input_requires_fields() {
    assert_eq!(
        validate_registration_input("", "hunter22", "hunter22"),
        Err("Enter an email and a password.")
    );
    assert_eq!(
        validate_registration_input("a@b.com", "", ""),
        Err("Enter an email and a password.")
    );
}

#[test]
fn validate_registration_input_enforces_minimum_length() {
    assert_eq!(
        validate_registration_input("a@b.com", "abc12", "abc12"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_registration_input("a@b.com", "abc123", "abc123").is_ok());
}

#[test]
fn validate_registration_input_rejects_mismatch() {
    assert_eq!(
        validate_registration_input("a@b.com", "abc123", "abc124"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_registration_input_rejects_bad_email() {
    assert_eq!(
        validate_registration_input("ada.example.com", "abc123", "abc123"),
        Err("Enter a valid email address.")
    );
}
