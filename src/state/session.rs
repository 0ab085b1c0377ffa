//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The bearer token lives in
//! persistent storage; this store mirrors the resolved user into signals.
//!
//! ERROR HANDLING
//! ==============
//! `load_user` and `logout` never fail from the caller's point of view: any
//! doubt about the session collapses to anonymous, and the cause is logged at
//! warn. `change_password` returns its error because the UI has to show it.
//!
//! CONCURRENCY
//! ===========
//! `load_user` and `logout` each await one request and are not serialized
//! against each other. Whichever settles last decides `user`. Overlapping
//! loads are counted, so `loading` stays true until the last one settles.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, RequestAuth, SessionApi};
use crate::net::types::{PasswordChange, User};
use crate::util::storage::TokenStorage;

/// Point-in-time view of the session for guards and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Current user plus the token-backed session operations.
#[derive(Clone)]
pub struct SessionStore {
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
    pending_loads: StoredValue<u32>,
    auth: StoredValue<RequestAuth>,
    api: Arc<dyn SessionApi>,
    storage: Arc<dyn TokenStorage>,
    config: ClientConfig,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user.get_untracked())
            .field("loading", &self.loading.get_untracked())
            .field("auth", &self.auth.get_value())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an anonymous session.
    pub fn new(api: Arc<dyn SessionApi>, storage: Arc<dyn TokenStorage>, config: ClientConfig) -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(false),
            pending_loads: StoredValue::new(0),
            auth: StoredValue::new(RequestAuth::anonymous()),
            api,
            storage,
            config,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with_untracked(Option::is_some)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get_untracked()
    }

    pub fn user_signal(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    pub fn loading_signal(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// Authorization attached to this session's requests.
    pub fn auth(&self) -> RequestAuth {
        self.auth.get_value()
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState { user: self.user(), loading: self.is_loading() }
    }

    fn stored_token(&self) -> Option<String> {
        self.storage.get(&self.config.token_key).filter(|token| !token.is_empty())
    }

    /// Session auth, or the persisted token if no load has run yet.
    fn current_auth(&self) -> RequestAuth {
        let auth = self.auth.get_value();
        if !auth.is_anonymous() {
            return auth;
        }
        self.stored_token().map_or(auth, |token| RequestAuth::bearer(&token))
    }

    fn clear_session(&self) {
        self.auth.set_value(RequestAuth::anonymous());
        self.user.set(None);
    }

    fn forget_token(&self) {
        self.storage.remove(&self.config.token_key);
        self.clear_session();
    }

    /// Resolve the current user from the persisted token.
    ///
    /// Without a token the session becomes anonymous and no request is made.
    /// Otherwise `GET /user/me` runs with that token; only an envelope with
    /// code 0 authenticates. Storage is never modified.
    pub async fn load_user(&self) {
        let Some(token) = self.stored_token() else {
            self.clear_session();
            return;
        };

        let auth = RequestAuth::bearer(&token);
        self.auth.set_value(auth.clone());

        self.pending_loads.update_value(|pending| *pending += 1);
        self.loading.set(true);
        let result = self.api.current_user(&auth).await.and_then(|envelope| envelope.into_data::<User>());
        self.pending_loads.update_value(|pending| *pending = pending.saturating_sub(1));
        self.loading.set(self.pending_loads.get_value() > 0);

        match result {
            Ok(user) => {
                log!("session loaded for {}", user.username);
                self.user.set(Some(user));
            }
            Err(e) => {
                warn!("session load failed, continuing anonymous: {e}");
                self.user.set(None);
            }
        }
    }

    /// End the session.
    ///
    /// The logout request is awaited but its outcome is ignored; the token is
    /// removed and the session cleared whatever happened on the network.
    pub async fn logout(&self) {
        let auth = self.current_auth();
        if let Err(e) = self.api.logout(&auth).await {
            warn!("logout request failed, clearing local session anyway: {e}");
        }
        self.forget_token();
    }

    /// Persist a freshly issued token and resolve its user.
    ///
    /// Returns whether the session is authenticated afterwards. Blank tokens
    /// are ignored without touching storage.
    pub async fn login(&self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            warn!("ignoring blank session token");
            return false;
        }
        self.storage.set(&self.config.token_key, token);
        self.load_user().await;
        self.is_authenticated()
    }

    /// Change the signed-in user's password.
    ///
    /// A server answer of "not logged in" ends the local session as well.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] if the passwords break the local rules,
    /// [`ApiError::Unauthenticated`] without a token, or the request/envelope
    /// error otherwise.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let body = PasswordChange::new(old_password, new_password);
        body.validate()?;

        let auth = self.current_auth();
        if auth.is_anonymous() {
            return Err(ApiError::Unauthenticated);
        }

        let result = self.api.change_password(&auth, &body).await.and_then(|envelope| envelope.check());
        match &result {
            Ok(()) => log!("password changed"),
            Err(e) if e.is_unauthenticated() => {
                warn!("password change rejected, session expired: {e}");
                self.forget_token();
            }
            Err(e) => warn!("password change failed: {e}"),
        }
        result
    }

    /// Fire-and-forget [`Self::load_user`] on the browser event loop.
    #[cfg(feature = "hydrate")]
    pub fn spawn_load_user(&self) {
        let store = self.clone();
        leptos::task::spawn_local(async move { store.load_user().await });
    }

    /// Fire-and-forget [`Self::logout`] on the browser event loop.
    #[cfg(feature = "hydrate")]
    pub fn spawn_logout(&self) {
        let store = self.clone();
        leptos::task::spawn_local(async move { store.logout().await });
    }
}
