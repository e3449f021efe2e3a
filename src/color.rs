//! Packed 24-bit colors (`0xRRGGBB`) and their CSS / field text forms.

use crate::error::{PickerError, Result};

/// Mask for a packed 24-bit color.
pub const COLOR_MASK: u32 = 0xff_ffff;

/// Pack 0–255 channels into `0xRRGGBB`.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split `0xRRGGBB` into its channels. Bits above 24 are ignored.
pub fn unpack_rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

/// Parse a CSS color: `#rgb`, `#rrggbb`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
///
/// Parsing is loose and nothing is masked. `#` forms other than the
/// three-digit short form read the leading hex digits as one integer, so
/// `#12zz` is `0x12` and `#1234567` is `0x1234567`. The functional forms are
/// split on runs of non-digits and the first three groups after the leading
/// segment are the channels; a channel over 255 spills into the byte above.
/// Only text with no digits where a number is expected is an error.
pub fn to_number(css: &str) -> Result<u32> {
    let invalid = || PickerError::InvalidColor(css.to_string());

    if let Some(hex) = css.strip_prefix('#') {
        if let [r, g, b] = hex.chars().collect::<Vec<_>>()[..] {
            let nibble = |c: char| c.to_digit(16).ok_or_else(invalid);
            return Ok(nibble(r)? * 0x11_0000 + nibble(g)? * 0x1100 + nibble(b)? * 0x11);
        }
        return parse_leading(hex, 16).ok_or_else(invalid);
    }

    let mut parts = css.split(|c: char| !c.is_ascii_digit());
    // Leading segment is whatever precedes the first separator ("" for "rgb(").
    parts.next();
    let mut channels = [0u32; 3];
    let mut groups = parts.filter(|p| !p.is_empty());
    for channel in &mut channels {
        let group = groups.next().ok_or_else(invalid)?;
        *channel = group.parse().map_err(|_| invalid())?;
    }
    Ok(channels[0]
        .wrapping_mul(0x1_0000)
        .wrapping_add(channels[1].wrapping_mul(0x100))
        .wrapping_add(channels[2]))
}

/// Format as `rgb(r,g,b)`.
pub fn to_css(color: u32) -> String {
    let (r, g, b) = unpack_rgb(color);
    format!("rgb({},{},{})", r, g, b)
}

/// Format as six lowercase hex digits, no `#`.
pub fn to_hex(color: u32) -> String {
    format!("{:06x}", color & COLOR_MASK)
}

/// Read the leading digits of `text` in `radix`, ignoring surrounding
/// whitespace and any trailing garbage. `None` when no digit leads.
fn parse_leading(text: &str, radix: u32) -> Option<u32> {
    let digits: Vec<u32> = text
        .trim()
        .chars()
        .map_while(|c| c.to_digit(radix))
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(
        digits
            .into_iter()
            .fold(0u32, |acc, d| acc.wrapping_mul(radix).wrapping_add(d)),
    )
}

/// Parse hex field text into a packed color, masked to 24 bits.
pub fn parse_hex_field(text: &str) -> Option<u32> {
    let text = text.trim();
    let text = text.strip_prefix('#').unwrap_or(text);
    parse_leading(text, 16).map(|v| v & COLOR_MASK)
}

/// Parse decimal channel field text, masked to a byte.
pub fn parse_channel_field(text: &str) -> Option<u8> {
    parse_leading(text, 10).map(|v| (v & 0xff) as u8)
}
