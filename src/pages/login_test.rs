use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ana  ", "hunter2"),
        Ok(("ana".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "hunter2"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("ana", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Enter both username and password."));
}
