use super::*;

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_query_component("desk-lamp_2.v~1"), "desk-lamp_2.v~1");
}

#[test]
fn spaces_and_reserved_characters_are_escaped() {
    assert_eq!(encode_query_component("desk lamp"), "desk%20lamp");
    assert_eq!(encode_query_component("a&b=c?"), "a%26b%3Dc%3F");
    assert_eq!(encode_query_component("50%"), "50%25");
}

#[test]
fn multibyte_utf8_is_escaped_per_byte() {
    assert_eq!(encode_query_component("ü"), "%C3%BC");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(encode_query_component(""), "");
}
