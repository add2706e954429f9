//! Full-page navigation helper.

/// Navigate the browser to `url` via `window.location`, abandoning the
/// current script context. No-op on the server build.
pub fn redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
