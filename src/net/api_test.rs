use super::*;

#[test]
fn api_url_prefixes_base() {
    assert_eq!(api_url("/advertisements"), "/api/advertisements");
}

#[test]
fn advertisement_endpoint_formats_expected_path() {
    assert_eq!(advertisement_endpoint(17), "/advertisement/17");
}

#[test]
fn image_endpoints_format_expected_paths() {
    assert_eq!(advertisement_images_endpoint(17), "/advertisement/17/images");
    assert_eq!(advertisement_image_endpoint(17, 3), "/advertisement/17/images/3");
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(user_endpoint(5), "/user/5");
    assert_eq!(user_advertisements_endpoint(5), "/user/5/advertisements");
}

#[test]
fn search_endpoint_encodes_query() {
    assert_eq!(search_endpoint("desk lamp"), "/search?query=desk%20lamp");
}

#[test]
fn auth_header_value_formats_bearer_scheme() {
    assert_eq!(auth_header_value("abc123"), "Bearer abc123");
}

#[test]
fn status_error_maps_401_to_unauthorized() {
    assert_eq!(status_error(401, Some("nope".to_owned())), ApiError::Unauthorized);
}

#[test]
fn status_error_keeps_server_message() {
    assert_eq!(
        status_error(403, Some("not your advertisement".to_owned())),
        ApiError::Status(403, "not your advertisement".to_owned())
    );
}

#[test]
fn status_error_falls_back_to_generic_message() {
    assert_eq!(
        status_error(500, None),
        ApiError::Status(500, "request failed: 500".to_owned())
    );
}

#[test]
fn api_error_display_is_user_presentable() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    assert_eq!(ApiError::Status(400, "bad input".to_owned()).to_string(), "bad input");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}
