//! # notes-client
//!
//! Leptos + WASM client state for the notes front-end.
//!
//! This crate holds the stores the UI binds to: the selected note category and
//! the authenticated session (current user, bearer token, logout). Network and
//! storage access sit behind traits in `net` and `util` so the stores run the
//! same way in the browser and in native tests.


pub mod config;
pub mod net;
pub mod state;
pub mod util;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::state::category::CategoryStore;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// Build the browser-backed stores and register them as Leptos context.
///
/// Components fetch them with `expect_context::<SessionStore>()` and
/// `expect_context::<CategoryStore>()`.
pub fn provide_stores(config: ClientConfig) -> (SessionStore, CategoryStore) {
    let api = Arc::new(HttpApi::new(config.clone()));
    let session = SessionStore::new(api, Arc::new(LocalStorage), config);
    let category = CategoryStore::new();
    provide_context(session.clone());
    provide_context(category);
    (session, category)
}

/// WASM entry point: install panic and console logging hooks.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_client() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("notes-client initialized");
}
