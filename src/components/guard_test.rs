use super::*;

fn logged_in() -> AuthState {
    let mut state = AuthState::default();
    state.apply_login("abc123".to_owned(), 42);
    state
}

#[test]
fn require_auth_redirects_to_login_when_logged_out() {
    assert_eq!(
        require_auth_decision(&AuthState::default()),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn require_auth_renders_when_logged_in() {
    assert_eq!(require_auth_decision(&logged_in()), GuardDecision::Render);
}

#[test]
fn guest_only_redirects_home_when_logged_in() {
    assert_eq!(guest_only_decision(&logged_in()), GuardDecision::Redirect("/"));
}

#[test]
fn guest_only_renders_when_logged_out() {
    assert_eq!(guest_only_decision(&AuthState::default()), GuardDecision::Render);
}
