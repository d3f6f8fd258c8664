//! Hex color codec
//!
//! `#rrggbb` strings to normalized RGB triples and back. Input is
//! case-insensitive, output is always lowercase.

use crate::color::Rgb;
use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Parse `#rrggbb` into its three channel bytes
pub fn parse_bytes(hex: &str) -> Result<[u8; 3]> {
    let bytes = hex.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Err(Error::invalid_hex(hex));
    }

    let mut out = [0u8; 3];
    for (channel, pair) in out.iter_mut().zip(bytes[1..].chunks_exact(2)) {
        let hi = nibble(pair[0]).ok_or_else(|| Error::invalid_hex(hex))?;
        let lo = nibble(pair[1]).ok_or_else(|| Error::invalid_hex(hex))?;
        *channel = hi * 16 + lo;
    }
    Ok(out)
}

/// Parse `#rrggbb` into a normalized [0, 1] RGB triple
pub fn parse(hex: &str) -> Result<Rgb> {
    let [r, g, b] = parse_bytes(hex)?;
    Ok(Rgb::from_u8(r, g, b))
}

/// Format channel bytes as lowercase `#rrggbb`
pub fn format_bytes(bytes: [u8; 3]) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Format a normalized RGB triple as lowercase `#rrggbb`
///
/// Channels are rounded to the nearest byte and clamped to [0, 255], so
/// colors slightly outside the gamut still format.
pub fn format(rgb: Rgb) -> String {
    format_bytes(rgb.to_u8())
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
