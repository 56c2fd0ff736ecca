//! WASM entry point wiring the session manager to the live page.
//!
//! The module is loaded as `<script type="module">`, which runs after the
//! document is parsed, so `boot` can look up the forms directly. Module
//! exports are not globals, so `boot` also installs `logout`, `showLogin`,
//! and `showRegister` on `window` for the templates' inline `onclick`
//! handlers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::SessionConfig;
use crate::net::api::HttpAuthApi;
use crate::session::SessionManager;
use crate::util::dom::{DomView, handlers, ids};
use crate::util::nav::BrowserNavigator;
use crate::util::storage::LocalStorage;

const CONFIG_ELEMENT_ID: &str = "auth-config";

pub type BrowserSession = SessionManager<LocalStorage, HttpAuthApi, DomView, BrowserNavigator>;

thread_local! {
    static SESSION: RefCell<Option<Rc<BrowserSession>>> = const { RefCell::new(None) };
}

fn session() -> Option<Rc<BrowserSession>> {
    SESSION.with(|s| s.borrow().clone())
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Config embedded by the template, or defaults.
fn read_config() -> SessionConfig {
    let Some(raw) = document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return SessionConfig::default();
    };
    SessionConfig::from_json(&raw).unwrap_or_else(|e| {
        leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
        SessionConfig::default()
    })
}

/// Value of the form control named `name`; works for inputs and selects.
fn field_value(form: &web_sys::HtmlFormElement, name: &str) -> String {
    form.query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|el| js_sys::Reflect::get(&el, &JsValue::from_str("value")).ok())
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Attach a submit listener to the form `form_id`, if the page has it.
fn on_submit<F>(form_id: &str, handler: F)
where
    F: Fn(Rc<BrowserSession>, web_sys::HtmlFormElement) + 'static,
{
    let Some(form) = document()
        .and_then(|d| d.get_element_by_id(form_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return;
    };

    let target = form.clone();
    let cb = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        if let Some(session) = session() {
            handler(session, target.clone());
        }
    });
    if form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref()).is_ok() {
        // Listener lives as long as the page.
        cb.forget();
    }
}

/// Expose `handler` as `window[name]`.
fn install_global(name: &str, handler: fn()) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn Fn()>::new(handler);
    match js_sys::Reflect::set(&window, &JsValue::from_str(name), cb.as_ref()) {
        // Global lives as long as the page.
        Ok(true) => cb.forget(),
        Ok(false) | Err(_) => leptos::logging::warn!("could not install window.{name}"),
    }
}

/// Module start: restore the cached session and hook up the auth forms.
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = read_config();
    let api = HttpAuthApi::new(&config);
    let session = Rc::new(SessionManager::new(config, LocalStorage, api, DomView, BrowserNavigator));
    session.load_initial_state();
    SESSION.with(|s| *s.borrow_mut() = Some(session));

    install_global(handlers::LOGOUT, logout);
    install_global(handlers::SHOW_LOGIN, show_login);
    install_global(handlers::SHOW_REGISTER, show_register);

    on_submit(ids::LOGIN_FORM, |session, form| {
        let username = field_value(&form, "username");
        let password = field_value(&form, "password");
        wasm_bindgen_futures::spawn_local(async move {
            session.login(&username, &password).await;
        });
    });

    on_submit(ids::REGISTER_FORM, |session, form| {
        let username = field_value(&form, "username");
        let password = field_value(&form, "password");
        let role = field_value(&form, "role");
        wasm_bindgen_futures::spawn_local(async move {
            session.register(&username, &password, &role).await;
        });
    });
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(session) = session() {
        session.logout();
    }
}

#[wasm_bindgen(js_name = showLogin)]
pub fn show_login() {
    if let Some(session) = session() {
        session.show_login();
    }
}

#[wasm_bindgen(js_name = showRegister)]
pub fn show_register() {
    if let Some(session) = session() {
        session.show_register();
    }
}

/// Re-validate the cached token against the backend. Pages that need fresh
/// role information call this after load; it is not run automatically.
#[wasm_bindgen(js_name = refreshProfile)]
pub async fn refresh_profile() {
    if let Some(session) = session() {
        session.refresh_profile().await;
    }
}
