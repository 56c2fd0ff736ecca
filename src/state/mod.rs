//! Client-side session state.
//!
//! DESIGN
//! ======
//! State is derived from the storage cache on demand rather than held in a
//! long-lived object, so a fresh page load and a mid-session update go through
//! the same projection.

pub mod auth;
