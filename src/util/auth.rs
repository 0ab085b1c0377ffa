//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

/// Path anonymous visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// True once loading finished without a user.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a guarded route should navigate for `state`, if anywhere.
pub fn unauth_redirect_target(state: &SessionState) -> Option<&'static str> {
    should_redirect_unauth(state).then_some(LOGIN_PATH)
}
