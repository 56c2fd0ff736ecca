//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` drives rendering of the auth links / user-info blocks;
//! `ClientSession` is what the storage cache holds once a login completes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

/// The UI mode derived from the cached session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated { username: String, role: String },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

impl From<Option<&ClientSession>> for AuthState {
    fn from(session: Option<&ClientSession>) -> Self {
        session.map_or(Self::Anonymous, |s| Self::Authenticated {
            username: s.username.clone(),
            role: s.role.clone(),
        })
    }
}

/// A complete cached session. Only constructed when all three fields are present.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSession {
    pub token: String,
    pub username: String,
    pub role: String,
}

impl ClientSession {
    /// Build a session, or `None` if any field is missing or empty.
    pub fn from_parts(token: Option<String>, username: Option<String>, role: Option<String>) -> Option<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        Some(Self { token: present(token)?, username: present(username)?, role: present(role)? })
    }

    pub fn state(&self) -> AuthState {
        AuthState::from(Some(self))
    }
}

impl fmt::Debug for ClientSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSession")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

/// Which of the two auth forms is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormView {
    #[default]
    Login,
    Register,
}
