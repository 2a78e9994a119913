use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input(" Amy Lee ", " amy@example.com", "secret1"),
        Ok(SignupRequest {
            name: "Amy Lee".to_owned(),
            email: "amy@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_signup_input_requires_name_and_email() {
    assert_eq!(validate_signup_input("", "amy@example.com", "secret1"), Err("Enter your name and email."));
    assert_eq!(validate_signup_input("Amy", "  ", "secret1"), Err("Enter your name and email."));
}

#[test]
fn validate_signup_input_enforces_minimum_password_length() {
    assert_eq!(
        validate_signup_input("Amy", "amy@example.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_signup_input("Amy", "amy@example.com", "123456").is_ok());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_signup_input("Amy", "amy@example.com", "ééééé").is_err());
    assert!(validate_signup_input("Amy", "amy@example.com", "éééééé").is_ok());
}
