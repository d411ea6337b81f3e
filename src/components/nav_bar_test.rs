use super::*;

#[test]
fn search_target_builds_query_url() {
    assert_eq!(search_target("lamp"), Some("/search?query=lamp".to_owned()));
}

#[test]
fn search_target_trims_surrounding_whitespace() {
    assert_eq!(search_target("  desk lamp  "), Some("/search?query=desk%20lamp".to_owned()));
}

#[test]
fn search_target_empty_query_is_a_no_op() {
    assert_eq!(search_target(""), None);
    assert_eq!(search_target("   "), None);
}

#[test]
fn search_target_encodes_reserved_characters() {
    assert_eq!(search_target("50% off"), Some("/search?query=50%25%20off".to_owned()));
}
