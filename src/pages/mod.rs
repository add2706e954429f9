//! Page-level components, one per route.

pub mod login;
pub mod outline;
