//! Signed payload parsing and canonicalization.
//!
//! The client platform delivers `initData` as an
//! `application/x-www-form-urlencoded` string: `&`-separated `key=value`
//! pairs with percent-escapes and `+` for space. One field, `hash`, carries
//! the MAC; every other value is an opaque string.

use crate::domain::errors::PayloadError;

/// A parsed signed payload: the opaque fields plus the extracted `hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    fields: Vec<(String, String)>,
    hash: String,
}

impl SignedPayload {
    /// Parse a raw payload string, separating the `hash` field out.
    ///
    /// Fails if `hash` is absent or appears more than once. Field order is
    /// preserved as received; canonicalization sorts later.
    pub fn parse(raw: &str) -> Result<Self, PayloadError> {
        let mut fields = Vec::new();
        let mut hash: Option<String> = None;

        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            let key = decode_component(key);
            let value = decode_component(value);

            if key == "hash" {
                if hash.is_some() {
                    return Err(PayloadError::DuplicateHash);
                }
                hash = Some(value);
            } else {
                fields.push((key, value));
            }
        }

        let hash = hash.ok_or(PayloadError::MissingHash)?;
        Ok(Self { fields, hash })
    }

    /// The hex MAC extracted from the payload.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The remaining fields, in received order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Build the data-check string the MAC is computed over: fields sorted
    /// by key (byte-wise), joined as `key=value` lines.
    pub fn canonical_string(&self) -> String {
        let mut entries: Vec<&(String, String)> = self.fields.iter().collect();
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Decode one URL-query component: `+` becomes space, `%XX` becomes the byte
/// it names. Malformed escapes pass through literally, and non-UTF-8 bytes
/// are replaced, so decoding never fails.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
