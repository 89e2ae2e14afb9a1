//! The static mini-app page served at the root route.

/// Inlined at compile time; the gateway has no other static assets.
pub const MINI_APP_PAGE: &str = include_str!("../assets/index.html");
