//! Networking modules for the backend's auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and `types`
//! defines the JSON/form payloads exchanged with the backend.

pub mod api;
pub mod error;
pub mod types;
