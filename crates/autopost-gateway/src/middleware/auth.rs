//! Admin-credential check for mutating routes.

use axum::http::HeaderMap;

use crate::domain::error::ApiError;
use crate::middleware::cors::ADMIN_KEY_HEADER;

/// Require a valid `x-admin-key` header.
///
/// `expected: None` means administration is not configured, and every
/// attempt is rejected rather than left open.
pub fn require_admin(headers: &HeaderMap, expected: Option<&str>) -> Result<(), ApiError> {
    let expected = expected.ok_or(ApiError::InvalidAdminKey)?;
    let provided = headers
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::InvalidAdminKey)?;

    if constant_time_compare(provided, expected) {
        Ok(())
    } else {
        Err(ApiError::InvalidAdminKey)
    }
}

/// Constant-time string comparison to prevent timing attacks.
///
/// Both inputs are padded to the longer length (with different pad bytes so
/// unequal lengths cannot collide) and compared via `subtle`, together with
/// a constant-time length check.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    use subtle::ConstantTimeEq;

    let max_len = std::cmp::max(a.len(), b.len());

    let mut a_padded = vec![0u8; max_len];
    let mut b_padded = vec![0xFFu8; max_len];
    a_padded[..a.len()].copy_from_slice(a.as_bytes());
    b_padded[..b.len()].copy_from_slice(b.as_bytes());

    let lengths_equal = a.len().ct_eq(&b.len());
    let contents_equal = a_padded.ct_eq(&b_padded);

    (lengths_equal & contents_equal).into()
}
