//! RGBA8 pixel buffers and the host surfaces they are flushed to.

/// A `width × height` RGBA8 buffer, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        Some([
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ])
    }

    /// Overwrite the pixel at `(x, y)`. Writes outside the raster are dropped.
    pub fn put_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let o = self.offset(x as u32, y as u32);
        self.data[o..o + 4].copy_from_slice(&rgba);
    }

    /// Replace every pixel with those of `other`, which must match in size.
    pub fn copy_from(&mut self, other: &Raster) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.data.copy_from_slice(&other.data);
    }
}

/// Host drawable that receives finished frames.
pub trait Surface {
    fn put_image(&mut self, image: &Raster);
}

/// Host element that may or may not provide a 2D raster surface.
pub trait Canvas {
    type Surface: Surface;

    fn context_2d(&mut self) -> Option<Self::Surface>;
}

/// In-memory surface keeping the last flushed frame.
#[derive(Debug, Default)]
pub struct MemorySurface {
    frame: Option<Raster>,
    flushes: usize,
}

impl MemorySurface {
    /// Last frame flushed, if any.
    pub fn frame(&self) -> Option<&Raster> {
        self.frame.as_ref()
    }

    /// Number of frames flushed so far.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Surface for MemorySurface {
    fn put_image(&mut self, image: &Raster) {
        if let Some(frame) = self.frame.as_mut()
            && frame.width == image.width
            && frame.height == image.height
        {
            frame.copy_from(image);
        } else {
            self.frame = Some(image.clone());
        }
        self.flushes += 1;
    }
}

/// Canvas for headless use. An unsupported canvas yields no surface.
#[derive(Debug, Clone, Copy)]
pub struct MemoryCanvas {
    supported: bool,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self { supported: true }
    }

    /// A canvas without 2D support.
    pub fn unsupported() -> Self {
        Self { supported: false }
    }
}

impl Default for MemoryCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MemoryCanvas {
    type Surface = MemorySurface;

    fn context_2d(&mut self) -> Option<MemorySurface> {
        self.supported.then(MemorySurface::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let r = Raster::new(3, 2);
        assert_eq!(r.data().len(), 24);
        assert!(r.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut r = Raster::new(2, 2);
        r.put_pixel(1, 1, [1, 2, 3, 4]);
        r.put_pixel(-1, 0, [9, 9, 9, 9]);
        r.put_pixel(2, 0, [9, 9, 9, 9]);
        assert_eq!(r.pixel(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(r.pixel(2, 0), None);
        assert_eq!(r.data().iter().filter(|&&b| b == 9).count(), 0);
    }

    #[test]
    fn test_memory_surface_counts_flushes() {
        let mut canvas = MemoryCanvas::new();
        let mut surface = canvas.context_2d().unwrap();
        assert!(surface.frame().is_none());
        let mut r = Raster::new(1, 1);
        surface.put_image(&r);
        r.put_pixel(0, 0, [5, 5, 5, 255]);
        surface.put_image(&r);
        assert_eq!(surface.flushes(), 2);
        assert_eq!(surface.frame().unwrap().pixel(0, 0), Some([5, 5, 5, 255]));
    }

    #[test]
    fn test_unsupported_canvas() {
        assert!(MemoryCanvas::unsupported().context_2d().is_none());
    }
}
