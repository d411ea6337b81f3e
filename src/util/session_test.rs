use super::*;

#[test]
fn session_from_entries_parses_stored_string_id() {
    let session = session_from_entries(Some("abc123".to_owned()), Some("42".to_owned()));
    assert_eq!(
        session,
        Some(Session {
            token: "abc123".to_owned(),
            user_id: 42,
        })
    );
}

#[test]
fn session_from_entries_absent_token_is_logged_out() {
    assert_eq!(session_from_entries(None, Some("42".to_owned())), None);
}

#[test]
fn session_from_entries_empty_token_is_logged_out() {
    assert_eq!(session_from_entries(Some(String::new()), Some("42".to_owned())), None);
}

#[test]
fn session_from_entries_missing_user_id_is_logged_out() {
    assert_eq!(session_from_entries(Some("abc123".to_owned()), None), None);
}

#[test]
fn session_from_entries_rejects_non_numeric_user_id() {
    assert_eq!(
        session_from_entries(Some("abc123".to_owned()), Some("forty-two".to_owned())),
        None
    );
}

#[test]
fn stored_form_round_trips() {
    let session = Session {
        token: "tok".to_owned(),
        user_id: 7,
    };
    let restored = session_from_entries(Some(session.token.clone()), Some(session.user_id.to_string()));
    assert_eq!(restored, Some(session));
}
