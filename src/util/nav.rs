//! Full-page navigation.

/// Reads and changes the browser location.
pub trait Navigator {
    /// Path component of the current location, e.g. `"/"` or `"/ui/products"`.
    fn current_path(&self) -> String;
    /// Navigate the whole page to `path`.
    fn navigate(&self, path: &str);
}

/// `window.location`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("no window; cannot navigate to {path}");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            leptos::logging::warn!("navigation to {path} failed: {e:?}");
        }
    }
}
