use super::*;

#[test]
fn advertisement_deserializes_camel_case_keys() {
    let json = r#"{
        "id": 7,
        "userId": 3,
        "title": "Desk lamp",
        "description": "Barely used",
        "images": [{"id": 1, "imageUrl": "https://img.example/1.jpg"}],
        "createdAt": "2024-05-01T12:00:00Z"
    }"#;
    let ad: Advertisement = serde_json::from_str(json).unwrap();
    assert_eq!(ad.id, 7);
    assert_eq!(ad.user_id, 3);
    assert_eq!(ad.images.len(), 1);
    assert_eq!(ad.images[0].image_url, "https://img.example/1.jpg");
    assert_eq!(ad.created_at.as_deref(), Some("2024-05-01T12:00:00Z"));
}

#[test]
fn advertisement_defaults_missing_images_and_timestamp() {
    let json = r#"{"id": 1, "userId": 2, "title": "Bike", "description": "Red"}"#;
    let ad: Advertisement = serde_json::from_str(json).unwrap();
    assert!(ad.images.is_empty());
    assert_eq!(ad.created_at, None);
}

#[test]
fn user_tolerates_omitted_optional_fields() {
    let json = r#"{"id": 5, "username": "ana", "name": "Ana", "email": "ana@example.com"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.phone, None);
    assert_eq!(user.profile_image, None);
}

#[test]
fn login_response_extracts_token_and_user_id() {
    let json = r#"{"token": "abc123", "user": {"id": 42, "username": "ana"}}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.id, 42);
}

#[test]
fn advertisements_envelope_unwraps_list() {
    let json = r#"{"advertisements": [
        {"id": 1, "userId": 2, "title": "A", "description": "a"},
        {"id": 2, "userId": 2, "title": "B", "description": "b"}
    ]}"#;
    let envelope: AdvertisementsEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.advertisements.len(), 2);
}

#[test]
fn api_message_defaults_to_none() {
    let envelope: ApiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(envelope.message, None);
}
