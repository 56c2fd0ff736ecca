//! # tracker-auth
//!
//! Browser-side authentication glue for the product tracker UI.
//!
//! The crate keeps a small client-held session (bearer token, username, role)
//! in `localStorage`, calls the backend's token, user-registration, and
//! profile endpoints, and toggles the server-rendered auth sections of the
//! page to match.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTML templates own the DOM; this crate only looks elements up by id.
//! Every browser concern sits behind a small trait (`KeyValueStore`,
//! `AuthApi`, `AuthView`, `Navigator`) so `SessionManager` runs natively in
//! tests against in-memory fakes. The `hydrate` feature adds the web-sys and
//! gloo-net implementations plus the WASM entry point.

pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod test_support;

pub use config::SessionConfig;
pub use session::{ProfileRefresh, SessionManager};
pub use state::auth::{AuthState, ClientSession, FormView};
