//! Durable session persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state that survives a page reload. The auth
//! context reads it once at startup and is the only writer afterwards;
//! every other module treats stored session data as opaque.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_ID_KEY: &str = "userId";

/// A persisted login: bearer token plus the owning user's id.
///
/// Both values live or die together. A stored token without a parseable
/// user id (or the reverse) loads as no session at all, so no consumer
/// ever observes a half-written pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

impl Session {
    /// Read the persisted session, if any.
    ///
    /// Absence is a normal logged-out state, not an error; this never
    /// fails. Returns `None` on the server.
    pub fn load() -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user_id = storage.get_item(USER_ID_KEY).ok().flatten();
            session_from_entries(token, user_id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// Persist this session, overwriting any existing one.
    ///
    /// The token is stored as-is; no format validation is applied.
    pub fn save(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, &self.token);
            let _ = storage.set_item(USER_ID_KEY, &self.user_id.to_string());
        }
    }

    /// Remove any persisted session. Clearing an empty store is a no-op.
    pub fn clear() {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}

/// Build a [`Session`] from raw storage entries.
///
/// The user id is stored in its decimal string form and parsed back here.
/// An empty token, a missing entry, or an unparseable id all yield `None`.
pub fn session_from_entries(token: Option<String>, user_id: Option<String>) -> Option<Session> {
    let token = token?;
    if token.is_empty() {
        return None;
    }
    let user_id = user_id?.parse::<i64>().ok()?;
    Some(Session { token, user_id })
}
