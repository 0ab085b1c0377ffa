//! REST API seam for session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native/SSR: `HttpApi` answers [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser; tests substitute their own
//! [`SessionApi`] implementation.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` so stores decide the policy: session loading
//! degrades to anonymous, password changes surface the error to the UI.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{ApiCode, Envelope, PasswordChange};
use crate::config::ClientConfig;

pub const CURRENT_USER_PATH: &str = "/user/me";
pub const LOGOUT_PATH: &str = "/user/logout";
pub const CHANGE_PASSWORD_PATH: &str = "/user/changePassword";

#[cfg(feature = "hydrate")]
const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// Non-2xx response without a readable envelope.
    #[error("unexpected status: {status}")]
    Status { status: u16 },

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The envelope carried a non-zero code.
    #[error("rejected with code {code}: {msg}")]
    Rejected { code: i64, msg: String },

    /// Input failed local validation; nothing was sent.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// The operation needs a session token and none is held.
    #[error("not authenticated")]
    Unauthenticated,

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the server or the store reports the session as missing/expired.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::Status { status: 401 } | Self::Rejected { code: ApiCode::UNAUTHENTICATED, .. }
        )
    }
}

/// Authorization attached to a single request.
///
/// Stores hold one of these per session and pass it to every call, so there
/// is no shared default-header state on the HTTP layer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestAuth {
    bearer: Option<String>,
}

impl RequestAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: &str) -> Self {
        Self { bearer: Some(token.to_owned()) }
    }

    pub fn token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.bearer.is_none()
    }

    /// Value for the `Authorization` header, if a token is held.
    pub fn header_value(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

impl fmt::Debug for RequestAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bearer = if self.bearer.is_some() { "Some(<redacted>)" } else { "None" };
        f.debug_struct("RequestAuth").field("bearer", &format_args!("{bearer}")).finish()
    }
}

/// HTTP operations the session store depends on.
///
/// Futures are `?Send` because browser fetch futures are not.
#[async_trait::async_trait(?Send)]
pub trait SessionApi: Send + Sync {
    /// `GET /user/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or an unreadable body.
    async fn current_user(&self, auth: &RequestAuth) -> Result<Envelope, ApiError>;

    /// `POST /user/logout`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-2xx status.
    async fn logout(&self, auth: &RequestAuth) -> Result<(), ApiError>;

    /// `POST /user/changePassword`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or an unreadable body.
    async fn change_password(&self, auth: &RequestAuth, body: &PasswordChange) -> Result<Envelope, ApiError>;
}

/// Browser implementation of [`SessionApi`] over `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder, auth: &RequestAuth) -> gloo_net::http::RequestBuilder {
    match auth.header_value() {
        Some(value) => builder.header(AUTHORIZATION, &value),
        None => builder,
    }
}

/// Decode an envelope, falling back to the HTTP status when the body is unreadable.
#[cfg(feature = "hydrate")]
async fn read_envelope(resp: gloo_net::http::Response) -> Result<Envelope, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    match resp.json::<Envelope>().await {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(ApiError::Status { status }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[async_trait::async_trait(?Send)]
impl SessionApi for HttpApi {
    async fn current_user(&self, auth: &RequestAuth) -> Result<Envelope, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::get(&self.url(CURRENT_USER_PATH)), auth)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_envelope(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(CURRENT_USER_PATH), auth);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, auth: &RequestAuth) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::post(&self.url(LOGOUT_PATH)), auth)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGOUT_PATH), auth);
            Err(ApiError::Unavailable)
        }
    }

    async fn change_password(&self, auth: &RequestAuth, body: &PasswordChange) -> Result<Envelope, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::post(&self.url(CHANGE_PASSWORD_PATH)), auth)
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            read_envelope(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(CHANGE_PASSWORD_PATH), auth, body);
            Err(ApiError::Unavailable)
        }
    }
}
