//! Auth context operations shared by screens and the nav bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `RwSignal<AuthState>` provided by the app root is mutated only
//! here. Persisted session writes always precede the in-memory update so
//! a reload never resurrects a state the signal no longer reflects.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `logout` never fail from the caller's perspective. Remote
//! logout problems are logged and swallowed; the local session is cleared
//! unconditionally afterwards.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::session::Session;

/// How long the remote logout request may run before the local teardown
/// proceeds without it.
#[cfg(feature = "hydrate")]
const LOGOUT_TIMEOUT_MS: u64 = 2_000;

/// Enter the logged-in state with a token obtained from the server.
///
/// Persists the session first, then updates the shared signal. The token
/// is not re-verified here; the login screen already exchanged
/// credentials for it.
pub fn login(auth: RwSignal<AuthState>, token: String, user_id: i64) {
    let session = Session { token, user_id };
    session.save();
    auth.update(|state| state.session = Some(session));
}

/// Leave the logged-in state.
///
/// Two-step contract: attempt remote invalidation with a bounded timeout,
/// then unconditionally clear the persisted session and the shared
/// signal. Safe to call when already logged out.
pub async fn logout(auth: RwSignal<AuthState>) {
    attempt_remote_logout().await;
    Session::clear();
    auth.update(AuthState::apply_logout);
}

/// Drop a session the server no longer accepts.
///
/// The single handler for [`crate::net::api::ApiError::Unauthorized`]:
/// screens call this and let the route guards take care of redirecting.
pub fn expire_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    log::warn!("bearer token rejected; clearing session");
    Session::clear();
    auth.update(AuthState::apply_logout);
}

#[cfg(feature = "hydrate")]
async fn attempt_remote_logout() {
    use futures::FutureExt as _;

    let request = crate::net::api::logout().fuse();
    let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(LOGOUT_TIMEOUT_MS)).fuse();
    futures::pin_mut!(request, timeout);
    futures::select! {
        result = request => {
            if let Err(err) = result {
                log::warn!("logout request failed: {err}");
            }
        }
        () = timeout => {
            log::warn!("logout request timed out after {LOGOUT_TIMEOUT_MS} ms");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
async fn attempt_remote_logout() {}
