use super::*;

fn filled_form() -> RegisterForm {
    RegisterForm {
        username: "ana".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "hunter2".to_owned(),
        ..RegisterForm::default()
    }
}

#[test]
fn validate_register_input_accepts_filled_form() {
    assert_eq!(validate_register_input(&filled_form(), "hunter2"), Ok(()));
}

#[test]
fn validate_register_input_requires_core_fields() {
    let mut form = filled_form();
    form.email = String::new();
    assert_eq!(
        validate_register_input(&form, "hunter2"),
        Err("Username, name, email, and password are required.")
    );
}

#[test]
fn validate_register_input_rejects_whitespace_only_username() {
    let mut form = filled_form();
    form.username = "   ".to_owned();
    assert_eq!(
        validate_register_input(&form, "hunter2"),
        Err("Username, name, email, and password are required.")
    );
}

#[test]
fn validate_register_input_requires_matching_passwords() {
    assert_eq!(
        validate_register_input(&filled_form(), "different"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_register_input_allows_empty_optional_fields() {
    let form = filled_form();
    assert!(form.phone.is_empty() && form.location.is_empty());
    assert_eq!(validate_register_input(&form, "hunter2"), Ok(()));
}
