//! Query-string encoding helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search navigation builds `?query=` URLs on the client before handing
//! them to the router. Encoding lives here so it stays testable off-wasm.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Percent-encode `raw` for use as a single query-string value.
///
/// Unreserved characters (RFC 3986) pass through; everything else is
/// emitted as UTF-8 percent escapes.
pub fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push(hex_digit(byte >> 4));
                out.push(hex_digit(byte & 0x0f));
            }
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}
