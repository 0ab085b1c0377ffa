//! Networking modules for the notes REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the HTTP seam and its browser implementation, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
