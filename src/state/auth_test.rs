use super::*;

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert_eq!(state.user_id(), None);
    assert_eq!(state.token(), None);
}

#[test]
fn apply_login_sets_token_and_user_id_together() {
    let mut state = AuthState::default();
    state.apply_login("abc123".to_owned(), 42);
    assert!(state.is_logged_in());
    assert_eq!(state.user_id(), Some(42));
    assert_eq!(state.token(), Some("abc123".to_owned()));
}

#[test]
fn apply_login_replaces_existing_session() {
    let mut state = AuthState::default();
    state.apply_login("first".to_owned(), 1);
    state.apply_login("second".to_owned(), 2);
    assert_eq!(state.token(), Some("second".to_owned()));
    assert_eq!(state.user_id(), Some(2));
}

#[test]
fn apply_logout_clears_both_fields() {
    let mut state = AuthState::default();
    state.apply_login("abc123".to_owned(), 42);
    state.apply_logout();
    assert!(!state.is_logged_in());
    assert_eq!(state.user_id(), None);
    assert_eq!(state.token(), None);
}

#[test]
fn apply_logout_is_idempotent() {
    let mut state = AuthState::default();
    state.apply_login("abc123".to_owned(), 42);
    state.apply_logout();
    let after_first = state.clone();
    state.apply_logout();
    assert_eq!(state, after_first);
    assert_eq!(state, AuthState::default());
}
