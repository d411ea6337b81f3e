//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a single `RwSignal<AuthState>` context from the app root.
//! Route guards, the nav bar, and identity-dependent screens read it
//! reactively; only the operations in `util::auth` mutate it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::Session;

/// Authentication state derived from the persisted session.
///
/// The session carries both the bearer token and the user id, so the two
/// are always set and cleared together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// True when a session is present.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// The logged-in user's id, if any.
    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    /// Transition to logged in. Valid from any state; an existing session
    /// is replaced.
    pub fn apply_login(&mut self, token: String, user_id: i64) {
        self.session = Some(Session { token, user_id });
    }

    /// Transition to logged out. A no-op when already logged out.
    pub fn apply_logout(&mut self) {
        self.session = None;
    }
}
