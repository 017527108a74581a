//! Save codes shared as planner links: `https://host/?layout=<percent-encoded code>`.

use crate::{
    error::{GardenError, Section},
    logic::encoder::encode,
    models::garden::ParsedGardenData,
};

/// Query parameter carrying the save code.
pub const LAYOUT_PARAM: &str = "layout";

/// Canonical planner that understands `?layout=` links.
pub const DEFAULT_PLANNER_URL: &str = "https://palia-garden-planner.vercel.app/";

/// Whether `input` should be read as a link rather than a bare save code.
pub fn looks_like_url(input: &str) -> bool {
    input.contains("://") || input.contains('?')
}

/// Returns the bare save code: the percent-decoded `layout` parameter of a link,
/// or the trimmed input itself.
pub fn extract_save_code(input: &str) -> Result<String, GardenError> {
    let input = input.trim();
    if !looks_like_url(input) {
        return Ok(input.to_string());
    }
    let query = input
        .split_once('?')
        .map(|(_, query)| query)
        .unwrap_or_default();
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LAYOUT_PARAM)
        .map(|(_, value)| percent_decode(value))
        .unwrap_or_else(|| {
            Err(GardenError::malformed(
                Section::Link,
                format!("no '{LAYOUT_PARAM}' parameter in '{input}'"),
            ))
        })
}

/// Decodes `%XX` escapes, and `+` as a space, as found in query strings.
pub fn percent_decode(value: &str) -> Result<String, GardenError> {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = value.get(i + 1..i + 3).ok_or_else(|| {
                    GardenError::malformed(Section::Link, format!("truncated escape in '{value}'"))
                })?;
                let bad_escape =
                    || GardenError::malformed(Section::Link, format!("bad escape '%{escape}'"));
                if !escape.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(bad_escape());
                }
                let byte = u8::from_str_radix(escape, 16).map_err(|_| bad_escape())?;
                decoded.push(byte);
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded)
        .map_err(|_| GardenError::malformed(Section::Link, "layout is not valid UTF-8"))
}

/// Escapes everything outside the RFC 3986 unreserved set.
pub fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Link back to the planner for `data`.
pub fn planner_link(data: &ParsedGardenData, base_url: &str) -> Result<String, GardenError> {
    let code = encode(data)?;
    let separator = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{base_url}{separator}{LAYOUT_PARAM}={}",
        percent_encode(&code)
    ))
}
