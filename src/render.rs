//! Human-readable rendering of received frames.

use std::fmt::Write;

/// Render `data` with every printable ASCII byte kept and every other
/// byte replaced by one `.`.
///
/// Space is treated as non-printable so that runs of padding stand out.
///
/// ```
/// assert_eq!(cc1111::render::render_friendly(b"\x01AB\x02"), ".AB.");
/// assert_eq!(cc1111::render::render_friendly(b""), "");
/// ```
pub fn render_friendly(data: &[u8]) -> String {
    data.iter()
        .map(|&b| if (0x21..=0x7E).contains(&b) { b as char } else { '.' })
        .collect()
}

/// Render `data` as lowercase hex, two digits per byte.
pub fn render_hex(data: &[u8]) -> String {
    data.iter().fold(String::with_capacity(data.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
