use super::*;

#[test]
fn validate_new_ad_input_trims_both_fields() {
    assert_eq!(
        validate_new_ad_input("  Desk lamp  ", " Barely used "),
        Ok(("Desk lamp".to_owned(), "Barely used".to_owned()))
    );
}

#[test]
fn validate_new_ad_input_requires_both_fields() {
    assert_eq!(validate_new_ad_input("", "desc"), Err("Enter both a title and a description."));
    assert_eq!(validate_new_ad_input("title", "  "), Err("Enter both a title and a description."));
}

#[test]
fn create_ad_error_message_special_cases_listing_cap() {
    let err = ApiError::Status(400, AD_LIMIT_SERVER_MESSAGE.to_owned());
    assert_eq!(
        create_ad_error_message(&err),
        "You have reached the maximum number of advertisements allowed."
    );
}

#[test]
fn create_ad_error_message_passes_through_other_failures() {
    let err = ApiError::Status(500, "boom".to_owned());
    assert_eq!(create_ad_error_message(&err), "Failed to create advertisement: boom");
}
