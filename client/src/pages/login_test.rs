use super::*;

#[test]
fn validate_sign_in_input_trims_email_but_not_password() {
    assert_eq!(
        validate_sign_in_input("  ada@example.com ", " secret "),
        Ok(("ada@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_sign_in_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_sign_in_input_requires_at_sign() {
    assert_eq!(validate_sign_in_input("ada", "pw"), Err("Enter a valid email address."));
}

#[test]
fn sign_in_failed_message_hides_status_for_bad_credentials() {
    assert_eq!(sign_in_failed_message(&ApiError::Status(400)), "Invalid email or password.");
    assert_eq!(sign_in_failed_message(&ApiError::Status(401)), "Invalid email or password.");
}

#[test]
fn sign_in_failed_message_reports_other_failures() {
    assert_eq!(
        sign_in_failed_message(&ApiError::Status(503)),
        "Sign in failed: backend responded with status 503"
    );
}
