//! In-memory collaborators for session tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, NewUser, TokenResponse, UserProfile};
use crate::util::dom::{AuthView, Display};
use crate::util::nav::Navigator;

// =============================================================
// AuthApi
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Token { username: String, password: String },
    CreateUser { username: String, password: String, role: String },
    Profile { token: String },
}

/// Scripted backend: each endpoint pops its next queued response.
/// An empty queue answers with a network error.
#[derive(Default)]
pub struct FakeApi {
    token: RefCell<VecDeque<Result<TokenResponse, ApiError>>>,
    create: RefCell<VecDeque<Result<UserProfile, ApiError>>>,
    profile: RefCell<VecDeque<Result<UserProfile, ApiError>>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_ok(self, access_token: &str) -> Self {
        self.token.borrow_mut().push_back(Ok(TokenResponse {
            access_token: access_token.to_owned(),
            token_type: Some("bearer".to_owned()),
        }));
        self
    }

    pub fn token_err(self, err: ApiError) -> Self {
        self.token.borrow_mut().push_back(Err(err));
        self
    }

    pub fn create_ok(self, username: &str, role: &str) -> Self {
        self.create.borrow_mut().push_back(Ok(profile(username, role)));
        self
    }

    pub fn create_err(self, err: ApiError) -> Self {
        self.create.borrow_mut().push_back(Err(err));
        self
    }

    pub fn profile_ok(self, username: &str, role: &str) -> Self {
        self.profile.borrow_mut().push_back(Ok(profile(username, role)));
        self
    }

    pub fn profile_err(self, err: ApiError) -> Self {
        self.profile.borrow_mut().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn profile_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, ApiCall::Profile { .. })).count()
    }
}

fn profile(username: &str, role: &str) -> UserProfile {
    UserProfile { username: username.to_owned(), role: role.to_owned(), id: Some(1), disabled: Some(false) }
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("Failed to fetch".to_owned())))
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Token {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        });
        next(&self.token)
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        self.calls.borrow_mut().push(ApiCall::CreateUser {
            username: user.username.clone(),
            password: user.password.clone(),
            role: user.role.clone(),
        });
        next(&self.create)
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Profile { token: token.to_owned() });
        next(&self.profile)
    }
}

// =============================================================
// AuthView
// =============================================================

/// Records the last display/text per id and every form reset.
#[derive(Default)]
pub struct RecordingView {
    displays: RefCell<HashMap<String, Display>>,
    texts: RefCell<HashMap<String, String>>,
    resets: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.displays.borrow().get(id).copied()
    }

    /// Text content of `id`; untouched elements read as empty.
    pub fn text(&self, id: &str) -> String {
        self.texts.borrow().get(id).cloned().unwrap_or_default()
    }

    pub fn resets(&self) -> Vec<String> {
        self.resets.borrow().clone()
    }
}

impl AuthView for RecordingView {
    fn set_display(&self, id: &str, display: Display) {
        self.displays.borrow_mut().insert(id.to_owned(), display);
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts.borrow_mut().insert(id.to_owned(), text.to_owned());
    }

    fn reset_form(&self, id: &str) {
        self.resets.borrow_mut().push(id.to_owned());
    }
}

// =============================================================
// Navigator
// =============================================================

pub struct FakeNavigator {
    path: RefCell<String>,
    visits: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: RefCell::new(path.to_owned()), visits: RefCell::new(Vec::new()) }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = path.to_owned();
        self.visits.borrow_mut().push(path.to_owned());
    }
}
