use super::*;
use crate::net::types::User;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), role: "admin".to_owned() }
}

#[test]
fn anonymous_after_loading_redirects_to_login() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert_eq!(unauth_redirect_target(&state), Some("/login"));
}

#[test]
fn pending_load_without_user_waits() {
    let state = SessionState { user: None, loading: true };
    assert_eq!(unauth_redirect_target(&state), None);
}

#[test]
fn signed_in_user_stays_put() {
    let state = SessionState { user: Some(alice()), loading: false };
    assert_eq!(unauth_redirect_target(&state), None);
}

#[test]
fn reload_of_signed_in_user_does_not_redirect() {
    let state = SessionState { user: Some(alice()), loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn failed_session_load_leads_to_login() {
    use crate::config::ClientConfig;
    use crate::net::api::HttpApi;
    use crate::state::session::SessionStore;
    use crate::util::storage::MemoryStorage;
    use leptos::prelude::Owner;
    use std::sync::Arc;

    let owner = Owner::new();
    owner.set();
    let store = SessionStore::new(
        Arc::new(HttpApi::new(ClientConfig::default())),
        Arc::new(MemoryStorage::with_entry("token", "abc123")),
        ClientConfig::default(),
    );

    store.load_user().await;

    assert_eq!(unauth_redirect_target(&store.snapshot()), Some(LOGIN_PATH));
}
