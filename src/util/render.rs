//! Pure projection of auth state onto the page.
//!
//! These functions hold no state and make no calls beyond the [`AuthView`]
//! handles they are given.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::dom::{AuthView, Display, ids};
use crate::state::auth::{AuthState, FormView};

/// Show either the auth links or the user-info block.
///
/// Anonymous rendering leaves the username/role text untouched; the block
/// holding it is hidden.
pub fn render_auth<V: AuthView + ?Sized>(view: &V, state: &AuthState) {
    match state {
        AuthState::Authenticated { username, role } => {
            view.set_display(ids::AUTH_LINKS, Display::None);
            view.set_display(ids::USER_INFO, Display::Inline);
            view.set_text(ids::USERNAME_DISPLAY, username);
            view.set_text(ids::USER_ROLE_DISPLAY, role);
        }
        AuthState::Anonymous => {
            view.set_display(ids::AUTH_LINKS, Display::Inline);
            view.set_display(ids::USER_INFO, Display::None);
        }
    }
}

/// Show one of the login/register sections and hide the other.
pub fn show_form<V: AuthView + ?Sized>(view: &V, form: FormView) {
    let (login, register) = match form {
        FormView::Login => (Display::Block, Display::None),
        FormView::Register => (Display::None, Display::Block),
    };
    view.set_display(ids::LOGIN_SECTION, login);
    view.set_display(ids::REGISTER_SECTION, register);
}

pub fn hide_gated_sections<V: AuthView + ?Sized>(view: &V) {
    for id in ids::AUTH_GATED_SECTIONS {
        view.set_display(id, Display::None);
    }
}
