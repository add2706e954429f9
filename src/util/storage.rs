//! Browser-backed session store.
//!
//! Reads and writes `localStorage` through web-sys. Requires a browser
//! environment; on the server build every read is `None` and writes are
//! no-ops, so SSR treats every visitor as logged out.

use crate::state::session::SessionStore;

/// [`SessionStore`] over `window.localStorage`.
///
/// An absent window or inaccessible storage reads as empty rather than
/// erroring, matching the gate's fail-toward-login policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(key) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
