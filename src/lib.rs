//! # floem-colorwheel
//!
//! A color picker built around a hue ring with an inscribed
//! saturation/value square.
//!
//! The engine ([`ColorWheel`], [`Picker`]) draws into plain RGBA buffers and
//! works headless; with the default `view` feature, [`color_picker`] wraps it
//! in a [Floem](https://github.com/lapce/floem) panel.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_colorwheel::{MemoryCanvas, PickOutcome, Picker, WheelGeometry};
//!
//! let mut picker = Picker::new(&mut MemoryCanvas::new(), WheelGeometry::default()).unwrap();
//! let outcome = picker.pick(0x3b82f6);
//! picker.pointer_down(100.0, 100.0);
//! picker.pointer_up();
//! picker.commit();
//! assert!(matches!(futures::executor::block_on(outcome), PickOutcome::Chosen(_)));
//! ```

mod color;
mod constants;
mod error;
mod math;
mod picker;
mod raster;
mod wheel;

#[cfg(feature = "view")]
mod color_editor;
#[cfg(feature = "view")]
mod color_wheel;
#[cfg(feature = "view")]
mod inputs;

pub use color::{
    COLOR_MASK, pack_rgb, parse_channel_field, parse_hex_field, to_css, to_hex, to_number,
    unpack_rgb,
};
pub use error::{PickerError, Result};
pub use math::{hsv_to_rgb, rgb_to_hsv};
pub use picker::{Channel, EditSource, Fields, PickOutcome, Picker};
pub use raster::{Canvas, MemoryCanvas, MemorySurface, Raster, Surface};
pub use wheel::{ColorWheel, DragKind, DragSession, WheelGeometry};

#[cfg(feature = "view")]
pub use color_wheel::{FrameCanvas, FrameSurface, SharedPicker};

#[cfg(feature = "view")]
use floem::prelude::IntoView;

/// Creates the picker panel for `picker`.
///
/// Field edits and wheel drags go straight to the picker. Okay and Cancel
/// resolve the pending [`Picker::pick`] and then call `on_close`.
#[cfg(feature = "view")]
pub fn color_picker(picker: SharedPicker, on_close: impl Fn() + 'static) -> impl IntoView {
    color_editor::color_editor(picker, on_close)
}
