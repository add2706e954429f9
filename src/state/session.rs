//! Session gate: the persisted logged-in flag and its lifecycle.
//!
//! DESIGN
//! ======
//! The flag is owned by [`SessionGate`]; the persistence backend is injected
//! through [`SessionStore`] so the gate can run against browser storage in
//! the app and an in-memory map in tests. The gate only decides; the page
//! that runs the check performs the actual navigation to [`LOGIN_URL`].
//!
//! TRADE-OFFS
//! ==========
//! Anything other than the exact literal `"true"` reads as logged out, so an
//! unreadable or tampered store fails toward the login view, never toward
//! gated content.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key holding the logged-in flag. External contract with the login
/// flow; do not rename.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";

/// Flag value meaning "logged in". Any other value (or absence) is logged out.
pub const LOGGED_IN_VALUE: &str = "true";

/// Relative URL of the login view, the target of every gate redirect.
pub const LOGIN_URL: &str = "login.html";

/// String key-value persistence facade mirroring browser local storage.
pub trait SessionStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Outcome of a session check on a gated page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The flag is set; the page may render.
    Allow,
    /// No valid flag; the caller must navigate to [`LOGIN_URL`].
    RedirectToLogin,
}

/// Owner of the session flag semantics over an injected store.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionGate<S> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff the stored flag value is exactly [`LOGGED_IN_VALUE`].
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(SESSION_FLAG_KEY)
            .map_or(false, |v| v == LOGGED_IN_VALUE)
    }

    /// Decide whether a gated page may render or must redirect to login.
    #[must_use]
    pub fn check(&self) -> GateOutcome {
        if self.is_authenticated() {
            GateOutcome::Allow
        } else {
            GateOutcome::RedirectToLogin
        }
    }

    /// Record a successful sign-in by setting the flag.
    pub fn login(&self) {
        self.store.set(SESSION_FLAG_KEY, LOGGED_IN_VALUE);
    }

    /// Clear the flag unconditionally. Idempotent; the calling UI navigates
    /// to [`LOGIN_URL`] afterwards.
    pub fn logout(&self) {
        self.store.remove(SESSION_FLAG_KEY);
    }
}
