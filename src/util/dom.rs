//! Element ids owned by the HTML templates and the view seam over them.
//!
//! TRADE-OFFS
//! ==========
//! Pages include only some of these elements (the home page has the forms,
//! product pages have the gated sections), so a missing element is skipped
//! silently instead of being treated as an error.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub mod ids {
    pub const LOGIN_SECTION: &str = "login-section";
    pub const REGISTER_SECTION: &str = "register-section";
    pub const LOGIN_FORM: &str = "login-form";
    pub const REGISTER_FORM: &str = "register-form";
    pub const LOGIN_ERROR: &str = "login-error";
    pub const REGISTER_ERROR: &str = "register-error";
    pub const REGISTER_SUCCESS: &str = "register-success";
    pub const AUTH_LINKS: &str = "auth-links";
    pub const USER_INFO: &str = "user-info";
    pub const USERNAME_DISPLAY: &str = "username-display";
    pub const USER_ROLE_DISPLAY: &str = "user-role-display";

    /// Sections that only make sense with a session; hidden on logout.
    pub const AUTH_GATED_SECTIONS: [&str; 3] = ["add-product-section", "product-history-section", "add-event-section"];
}

/// Global function names the templates call from inline `onclick` handlers.
pub mod handlers {
    pub const LOGOUT: &str = "logout";
    pub const SHOW_LOGIN: &str = "showLogin";
    pub const SHOW_REGISTER: &str = "showRegister";
}

/// CSS `display` values the templates rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::None => "none",
        }
    }

    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// Handles onto the page elements the auth flow touches, addressed by id.
pub trait AuthView {
    fn set_display(&self, id: &str, display: Display);
    fn set_text(&self, id: &str, text: &str);
    /// Reset a `<form>` to its initial field values.
    fn reset_form(&self, id: &str);
}

/// The live document.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomView;

#[cfg(feature = "hydrate")]
impl DomView {
    fn element(id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }
}

#[cfg(feature = "hydrate")]
impl AuthView for DomView {
    fn set_display(&self, id: &str, display: Display) {
        use wasm_bindgen::JsCast;

        let Some(el) = Self::element(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
            return;
        };
        if let Err(e) = el.style().set_property("display", display.as_css()) {
            leptos::logging::warn!("could not set display on #{id}: {e:?}");
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = Self::element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn reset_form(&self, id: &str) {
        use wasm_bindgen::JsCast;

        if let Some(form) = Self::element(id).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) {
            form.reset();
        }
    }
}
