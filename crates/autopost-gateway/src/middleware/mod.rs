//! Middleware for the gateway: permissive CORS on every response, and the
//! constant-time admin-credential check used by mutating routes.

pub mod auth;
pub mod cors;

pub use auth::{constant_time_compare, require_admin};
pub use cors::{create_cors_layer, ADMIN_KEY_HEADER};
