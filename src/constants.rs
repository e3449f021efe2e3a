//! Sizing, glyph, and styling constants for the picker.

/// Outer diameter of the color wheel in pixels
pub const WHEEL_SIZE: u32 = 200;

/// Largest wheel diameter accepted
pub const MAX_WHEEL_SIZE: u32 = 4096;

/// Width of the hue ring
pub const WHEEL_THICKNESS: u32 = 10;

/// Gap between the ring's inner edge and the saturation/value square
pub const WHEEL_GAP: u32 = 2;

/// Selection handle: `1` dark outline, `0` light interior, `.` untouched.
pub const HANDLE: [&[u8; 7]; 7] = [
    b"..111..",
    b".10001.",
    b"10...01",
    b"10...01",
    b"10...01",
    b".10001.",
    b"..111..",
];

/// Distance from the handle's top-left cell to its center
pub const HANDLE_HALF: i64 = 3;

/// Gap between picker elements
#[cfg(feature = "view")]
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
#[cfg(feature = "view")]
pub const PADDING: f32 = 8.0;

/// Channel input field width
#[cfg(feature = "view")]
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex input field width
#[cfg(feature = "view")]
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
#[cfg(feature = "view")]
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
#[cfg(feature = "view")]
pub const LABEL_FONT: f32 = 10.0;

/// Swatch edge length
#[cfg(feature = "view")]
pub const SWATCH_SIZE: f32 = 32.0;

/// Border radius for swatch and buttons
#[cfg(feature = "view")]
pub const RADIUS: f32 = 4.0;
