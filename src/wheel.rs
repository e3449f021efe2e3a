//! Hue ring with an inscribed saturation/value square.
//!
//! The ring is rasterized once at construction. Every [`ColorWheel::draw`]
//! copies it into a working frame, fills the square for the current hue,
//! stamps the two selection handles and flushes the frame to the host
//! surface. Pointer drags are tracked by an explicit [`DragSession`] that
//! the host feeds through [`ColorWheel::on_drag_move`] and ends with
//! [`ColorWheel::on_drag_end`].

use std::f64::consts::TAU;

use log::{debug, trace, warn};

use crate::color::pack_rgb;
use crate::constants;
use crate::error::{PickerError, Result};
use crate::math;
use crate::raster::{Canvas, Raster, Surface};

/// Pixel dimensions of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelGeometry {
    /// Outer diameter of the ring.
    pub size: u32,
    /// Width of the ring.
    pub thickness: u32,
    /// Space between the ring's inner edge and the square.
    pub gap: u32,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            size: constants::WHEEL_SIZE,
            thickness: constants::WHEEL_THICKNESS,
            gap: constants::WHEEL_GAP,
        }
    }
}

impl WheelGeometry {
    pub fn new(size: u32, thickness: u32, gap: u32) -> Self {
        Self {
            size,
            thickness,
            gap,
        }
    }

    fn validate(&self) -> Result<()> {
        let used = self.thickness as u64 * 2 + self.gap as u64;
        if self.size == 0 || self.size > constants::MAX_WHEEL_SIZE || used >= self.size as u64 {
            return Err(PickerError::InvalidGeometry {
                size: self.size,
                thickness: self.thickness,
                gap: self.gap,
            });
        }
        Ok(())
    }

    pub fn center(&self) -> f64 {
        self.size as f64 / 2.0
    }

    pub fn outer(&self) -> f64 {
        self.center()
    }

    pub fn inner(&self) -> f64 {
        self.outer() - self.thickness as f64
    }

    /// Side of the square whose diagonal spans the space inside the ring.
    pub fn side(&self) -> f64 {
        let diam = self.size as f64 - self.thickness as f64 * 2.0 - self.gap as f64;
        (diam * diam / 2.0).sqrt()
    }

    /// Top-left pixel offset of the square, on both axes.
    pub fn start(&self) -> f64 {
        (self.center() - self.side() / 2.0).round()
    }

    /// Bottom-right pixel offset of the square (exclusive), on both axes.
    pub fn end(&self) -> f64 {
        (self.center() + self.side() / 2.0).round()
    }

    fn distance(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.center();
        let dy = y - self.center();
        (dx * dx + dy * dy).sqrt()
    }

    pub fn in_square(&self, x: f64, y: f64) -> bool {
        let (start, end) = (self.start(), self.end());
        x >= start && x < end && y >= start && y < end
    }

    pub fn in_ring(&self, x: f64, y: f64) -> bool {
        let d = self.distance(x, y);
        d >= self.inner() && d < self.outer()
    }

    /// Hue for the direction of `(x, y)` from the center, counterclockwise
    /// from 3 o'clock on screen.
    pub fn hue_at(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.center();
        let dy = y - self.center();
        (1.0 + (-dy).atan2(dx) / TAU).rem_euclid(1.0)
    }
}

/// Rasterize the full-saturation hue ring, antialiased over one pixel at
/// both edges.
fn rasterize_ring(geometry: &WheelGeometry) -> Raster {
    let size = geometry.size;
    let outer = geometry.outer();
    let inner = geometry.inner();
    let mut ring = Raster::new(size, size);

    for y in 0..size {
        for x in 0..size {
            let (fx, fy) = (x as f64, y as f64);
            let distance = geometry.distance(fx, fy);
            if distance < inner || distance >= outer {
                continue;
            }

            let (r, g, b) = math::hsv_to_rgb(geometry.hue_at(fx, fy), 1.0, 1.0);
            let alpha = if outer - distance < 1.0 {
                255.0 * (outer - distance)
            } else if distance - inner < 1.0 {
                255.0 * (distance - inner)
            } else {
                255.0
            };
            let alpha = alpha.round().clamp(0.0, 255.0) as u8;
            ring.put_pixel(x as i64, y as i64, [r, g, b, alpha]);
        }
    }

    ring
}

/// Stamp the handle glyph centered on `(cx, cy)`.
fn stamp_handle(frame: &mut Raster, cx: i64, cy: i64) {
    for (row, line) in constants::HANDLE.iter().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            let c = match cell {
                b'1' => 0x00,
                b'0' => 0xff,
                _ => continue,
            };
            frame.put_pixel(
                cx - constants::HANDLE_HALF + col as i64,
                cy - constants::HANDLE_HALF + row as i64,
                [c, c, c, 0xff],
            );
        }
    }
}

/// Which part of the wheel a drag started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Hue,
    SaturationValue,
}

/// One pointer-down-to-up gesture.
pub struct DragSession {
    kind: DragKind,
    on_update: Box<dyn FnMut(u32)>,
}

impl DragSession {
    pub fn kind(&self) -> DragKind {
        self.kind
    }
}

pub struct ColorWheel<S: Surface> {
    surface: S,
    geometry: WheelGeometry,
    /// Static hue ring, never modified after construction.
    ring: Raster,
    frame: Raster,
    hue: f64,
    saturation: f64,
    value: f64,
    drag: Option<DragSession>,
}

impl<S: Surface> ColorWheel<S> {
    /// Bind a wheel to `canvas`. Fails when the canvas has no 2D surface.
    pub fn new<C>(canvas: &mut C, geometry: WheelGeometry) -> Result<Self>
    where
        C: Canvas<Surface = S>,
    {
        let surface = canvas.context_2d().ok_or(PickerError::NoRasterSurface)?;
        geometry.validate()?;

        let ring = rasterize_ring(&geometry);
        debug!(
            "color wheel built: size {}, thickness {}, gap {}, square side {:.2}",
            geometry.size,
            geometry.thickness,
            geometry.gap,
            geometry.side()
        );

        Ok(Self {
            surface,
            geometry,
            frame: Raster::new(geometry.size, geometry.size),
            ring,
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
            drag: None,
        })
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Set the selection. Takes effect on the next [`draw`](Self::draw).
    pub fn set_hsv(&mut self, h: f64, s: f64, v: f64) {
        self.hue = h;
        self.saturation = s;
        self.value = v;
    }

    pub fn hsv(&self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.value)
    }

    /// Current selection packed as `0xRRGGBB`.
    pub fn color(&self) -> u32 {
        let (r, g, b) = math::hsv_to_rgb(self.hue, self.saturation, self.value);
        pack_rgb(r, g, b)
    }

    /// Compose ring, square and handles, then flush to the surface.
    pub fn draw(&mut self) {
        let geometry = self.geometry;
        let side = geometry.side();
        let start = geometry.start() as u32;
        let end = geometry.end() as u32;

        self.frame.copy_from(&self.ring);

        for y in start..end {
            let v = (y - start) as f64 / side;
            for x in start..end {
                let s = (x - start) as f64 / side;
                let (r, g, b) = math::hsv_to_rgb(self.hue, s, 1.0 - v);
                self.frame.put_pixel(x as i64, y as i64, [r, g, b, 0xff]);
            }
        }

        let angle = self.hue * TAU;
        let radius = geometry.outer() - geometry.thickness as f64 / 2.0;
        let hx = (angle.cos() * radius + geometry.center()).round();
        let hy = (geometry.center() - angle.sin() * radius).round();
        stamp_handle(&mut self.frame, hx as i64, hy as i64);

        let sx = (self.saturation * side + start as f64).round();
        let sy = ((1.0 - self.value) * side + start as f64).round();
        stamp_handle(&mut self.frame, sx as i64, sy as i64);

        self.surface.put_image(&self.frame);
        trace!(
            "wheel drawn: h {:.3} s {:.3} v {:.3}",
            self.hue,
            self.saturation,
            self.value
        );
    }

    /// Start a drag at `(x, y)`.
    ///
    /// Inside the square this starts a saturation/value drag; on the ring a
    /// hue drag. Anywhere else nothing happens and `false` is returned. The
    /// starting point is applied immediately and `on_update` receives the
    /// new color after every redraw until [`on_drag_end`](Self::on_drag_end).
    pub fn track(&mut self, x: f64, y: f64, on_update: impl FnMut(u32) + 'static) -> bool {
        if let Some(previous) = self.drag.take() {
            warn!("{:?} drag still active at pointer-down, ending it", previous.kind);
        }

        let kind = if self.geometry.in_square(x, y) {
            DragKind::SaturationValue
        } else if self.geometry.in_ring(x, y) {
            DragKind::Hue
        } else {
            debug!("pointer-down at ({x}, {y}) is outside ring and square");
            return false;
        };

        debug!("{kind:?} drag started at ({x}, {y})");
        self.drag = Some(DragSession {
            kind,
            on_update: Box::new(on_update),
        });
        self.apply_pointer(x, y);
        true
    }

    /// Pointer moved during a drag. Ignored when no drag is active.
    pub fn on_drag_move(&mut self, x: f64, y: f64) {
        if self.drag.is_some() {
            self.apply_pointer(x, y);
        }
    }

    /// Pointer released; ends the active drag, if any.
    pub fn on_drag_end(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!("{:?} drag ended", drag.kind);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        self.drag.as_ref().map(DragSession::kind)
    }

    fn apply_pointer(&mut self, x: f64, y: f64) {
        let Some(kind) = self.drag_kind() else {
            return;
        };

        match kind {
            DragKind::Hue => {
                self.hue = self.geometry.hue_at(x, y);
            }
            DragKind::SaturationValue => {
                let (start, end) = (self.geometry.start(), self.geometry.end());
                let side = self.geometry.side();
                let mx = x.clamp(start, end);
                let my = y.clamp(start, end);
                self.saturation = ((mx - start) / side).clamp(0.0, 1.0);
                self.value = (1.0 - (my - start) / side).clamp(0.0, 1.0);
            }
        }

        self.draw();
        let color = self.color();
        if let Some(drag) = self.drag.as_mut() {
            (drag.on_update)(color);
        }
    }
}
