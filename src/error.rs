//! Error type shared by the color math, the wheel and the picker.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PickerError {
    /// The string is not `#rgb`, `#rrggbb`, `rgb(...)` or `rgba(...)`.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    /// The host could not provide a 2D raster surface.
    #[error("No raster surface available")]
    NoRasterSurface,
    /// The ring leaves no room for the saturation/value square.
    #[error("Invalid wheel geometry: size {size}, thickness {thickness}, gap {gap}")]
    InvalidGeometry { size: u32, thickness: u32, gap: u32 },
}

pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PickerError::InvalidColor("#zz".into()).to_string(),
            "Invalid color: \"#zz\""
        );
        assert_eq!(
            PickerError::NoRasterSurface.to_string(),
            "No raster surface available"
        );
        assert_eq!(
            PickerError::InvalidGeometry {
                size: 10,
                thickness: 5,
                gap: 2
            }
            .to_string(),
            "Invalid wheel geometry: size 10, thickness 5, gap 2"
        );
    }
}
