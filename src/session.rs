//! Session/auth-state manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the login, registration, profile-refresh, and logout flows. Each flow
//! reads and writes the cached session through [`SessionCache`], calls the
//! backend through [`AuthApi`], and projects the result onto the page through
//! [`AuthView`].
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is handled inside the flow that issued the call.
//! Login and registration show the failure in their form's message slot;
//! profile refresh only logs, except for a 401 which ends the session.
//!
//! CONCURRENCY
//! ===========
//! Flows run on the browser's single thread and are not guarded against
//! re-entry: a second submit while a login is in flight issues a second
//! request, and a logout mid-login can be followed by the login's own writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::SessionConfig;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, NewUser};
use crate::state::auth::{AuthState, ClientSession, FormView};
use crate::util::dom::{AuthView, ids};
use crate::util::nav::Navigator;
use crate::util::render::{hide_gated_sections, render_auth, show_form};
use crate::util::storage::{KeyValueStore, SessionCache};

/// Result of [`SessionManager::refresh_profile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileRefresh {
    /// No token cached; nothing was requested.
    Skipped,
    /// Profile fetched and cached; the session is complete.
    Updated(ClientSession),
    /// The backend rejected the token and the session was logged out.
    Revoked,
    /// Transient failure or an incomplete profile; the token is left cached.
    Failed,
}

pub fn login_failed_message(reason: &str) -> String {
    format!("Login failed: {reason}")
}

pub fn registration_failed_message(reason: &str) -> String {
    format!("Registration failed: {reason}")
}

pub fn registered_message(username: &str) -> String {
    format!("User \"{username}\" registered successfully! You can now login.")
}

pub struct SessionManager<S, A, V, N> {
    config: SessionConfig,
    store: S,
    api: A,
    view: V,
    nav: N,
}

impl<S, A, V, N> SessionManager<S, A, V, N>
where
    S: KeyValueStore,
    A: AuthApi,
    V: AuthView,
    N: Navigator,
{
    pub fn new(config: SessionConfig, store: S, api: A, view: V, nav: N) -> Self {
        Self { config, store, api, view, nav }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn navigator(&self) -> &N {
        &self.nav
    }

    fn cache(&self) -> SessionCache<'_, S> {
        SessionCache::new(&self.store)
    }

    /// Render from the cached session without contacting the backend.
    ///
    /// The cache is trusted as-is; a token the backend has since revoked still
    /// renders as authenticated until the next authenticated request fails.
    pub fn load_initial_state(&self) -> AuthState {
        let state = self.cache().auth_state();
        render_auth(&self.view, &state);
        state
    }

    /// Exchange credentials for a token, then complete the session with a
    /// profile fetch and move to the protected route.
    ///
    /// The token is cached before the profile request. Navigation happens
    /// whatever the profile request returns: after a transient failure the
    /// token stays cached and the page renders anonymous until a later refresh
    /// completes the session; after a 401 the session is already cleared.
    pub async fn login(&self, username: &str, password: &str) {
        self.view.set_text(ids::LOGIN_ERROR, "");

        let credentials = Credentials::new(username, password);
        let token = match self.api.request_token(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                leptos::logging::warn!("login failed for {username}: {e}");
                self.view.set_text(ids::LOGIN_ERROR, &login_failed_message(&e.to_string()));
                return;
            }
        };

        self.cache().store_token(&token.access_token);
        // Navigates even after a revoked profile's logout.
        self.refresh_profile().await;
        self.nav.navigate(&self.config.protected_route);
    }

    /// Create a user, then switch to the login form on success.
    pub async fn register(&self, username: &str, password: &str, role: &str) {
        self.view.set_text(ids::REGISTER_ERROR, "");
        self.view.set_text(ids::REGISTER_SUCCESS, "");

        let user = NewUser { username: username.to_owned(), password: password.to_owned(), role: role.to_owned() };
        match self.api.create_user(&user).await {
            Ok(created) => {
                leptos::logging::log!("registered user {}", created.username);
                self.view.set_text(ids::REGISTER_SUCCESS, &registered_message(&created.username));
                self.view.reset_form(ids::REGISTER_FORM);
                self.show_login();
            }
            Err(e) => {
                leptos::logging::warn!("registration failed for {username}: {e}");
                self.view.set_text(ids::REGISTER_ERROR, &registration_failed_message(&e.to_string()));
            }
        }
    }

    /// Re-read username and role for the cached token.
    pub async fn refresh_profile(&self) -> ProfileRefresh {
        let Some(token) = self.cache().token() else {
            return ProfileRefresh::Skipped;
        };

        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                let cache = self.cache();
                cache.store_profile(&profile.username, &profile.role);
                // Render from the cache so a blank username or role reads the
                // same way here as on the next page load.
                let session = cache.load();
                render_auth(&self.view, &AuthState::from(session.as_ref()));
                match session {
                    Some(session) => ProfileRefresh::Updated(session),
                    None => {
                        leptos::logging::warn!("profile response missing username or role");
                        ProfileRefresh::Failed
                    }
                }
            }
            Err(e) if e.is_unauthorized() => {
                leptos::logging::warn!("session token rejected; logging out");
                self.logout();
                ProfileRefresh::Revoked
            }
            Err(e) => {
                leptos::logging::error!("error fetching user details: {e}");
                ProfileRefresh::Failed
            }
        }
    }

    /// Drop the cached session and return to an anonymous page. Idempotent.
    pub fn logout(&self) {
        self.cache().clear();
        render_auth(&self.view, &AuthState::Anonymous);
        hide_gated_sections(&self.view);

        if self.nav.current_path() == self.config.root_route {
            self.show_login();
        } else {
            self.nav.navigate(&self.config.root_route);
        }
    }

    pub fn show_login(&self) {
        show_form(&self.view, FormView::Login);
    }

    pub fn show_register(&self) {
        show_form(&self.view, FormView::Register);
    }
}
