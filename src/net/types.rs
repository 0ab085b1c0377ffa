//! Wire DTOs for the notes REST API.
//!
//! DESIGN
//! ======
//! Every JSON endpoint answers with the same envelope (`code`, `msg`, `data`).
//! `data` stays an untyped `serde_json::Value` until the code is checked,
//! because failure responses carry `{}` rather than the success payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Envelope status codes returned by the backend.
pub struct ApiCode;

impl ApiCode {
    /// Request succeeded.
    pub const OK: i64 = 0;
    /// Missing or invalid bearer token.
    pub const UNAUTHENTICATED: i64 = 4001;
    /// Request payload failed validation.
    pub const INVALID: i64 = 4003;
}

/// The authenticated user's profile as returned by `GET /user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Authorization role (e.g. `"admin"`, `"user"`).
    pub role: String,
}

/// Response wrapper shared by all JSON endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Build a success envelope around `data`.
    pub fn ok(data: serde_json::Value) -> Self {
        Self { code: ApiCode::OK, msg: "ok".to_owned(), data }
    }

    /// Build a failure envelope with an empty payload.
    pub fn err(code: i64, msg: &str) -> Self {
        Self { code, msg: msg.to_owned(), data: serde_json::json!({}) }
    }

    pub fn is_ok(&self) -> bool {
        self.code == ApiCode::OK
    }

    /// Check the status code and decode the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-zero code, or
    /// [`ApiError::Decode`] if the payload does not match `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.check()?;
        serde_json::from_value(self.data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Check the status code, discarding the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a non-zero code.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ApiError::Rejected { code: self.code, msg: self.msg.clone() })
        }
    }
}

/// Minimum accepted length for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /user/changePassword`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn new(old_password: &str, new_password: &str) -> Self {
        Self { old_password: old_password.to_owned(), new_password: new_password.to_owned() }
    }

    /// Apply the backend's password rules before sending.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] naming the first rule that fails.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.old_password.is_empty() {
            return Err(ApiError::Invalid("old password must not be empty".to_owned()));
        }
        if self.new_password.is_empty() {
            return Err(ApiError::Invalid("new password must not be empty".to_owned()));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(format!(
                "new password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.old_password == self.new_password {
            return Err(ApiError::Invalid("new password must differ from the old one".to_owned()));
        }
        Ok(())
    }
}
