use crate::error::{Error, Result};
use crate::platform::{LINES, WIDTH};

/// Gray level of an untouched e-paper pixel.
pub const WHITE: u8 = 0xf;
pub const BLACK: u8 = 0x0;

/// Bytes per row for a packed 4 bit buffer `width` pixels wide.
pub const fn stride(width: u32) -> usize { (width as usize + 1) / 2 }

/// Bytes needed for a packed 4 bit buffer of the given size.
pub const fn buffer_len(width: u32, height: u32) -> usize { stride(width) * height as usize }

/// A mutable view of a nibble-packed 4 bit grayscale image.
///
/// Rows are `stride(width)` bytes long. Pixel `x` lives in byte `x / 2` of its row: even
/// columns in the low nibble, odd columns in the high nibble. Writes never touch the
/// neighbouring nibble, so the order in which two pixels of a byte are written does not
/// matter.
#[derive(Debug)]
pub struct Canvas<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let needed = buffer_len(width, height);
        if data.len() < needed {
            return Err(Error::BufferSize { needed, actual: data.len() });
        }
        Ok(Canvas { data, width, height })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn stride(&self) -> usize { stride(self.width) }

    pub fn data(&self) -> &[u8] { &self.data[..buffer_len(self.width, self.height)] }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.stride() + x as usize / 2)
    }

    /// Store the low nibble of `level` at `(x, y)`. Returns false if the point was clipped.
    pub fn set_pixel(&mut self, x: i32, y: i32, level: u8) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let level = level & 0x0f;
        self.data[i] = if x & 1 == 0 { (self.data[i] & 0xf0) | level } else { (self.data[i] & 0x0f) | (level << 4) };
        true
    }

    /// Retrieves a pixel level; `None` if the point is out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        let byte = self.data[self.index(x, y)?];
        Some(if x & 1 == 0 { byte & 0x0f } else { byte >> 4 })
    }

    /// Set every pixel to `level`.
    pub fn fill(&mut self, level: u8) {
        let level = level & 0x0f;
        let len = buffer_len(self.width, self.height);
        self.data[..len].fill(level | (level << 4));
    }
}

/// A caller-owned display sized buffer. Text written with [`crate::Target::Framebuffer`]
/// accumulates here until the caller pushes it to the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// A white buffer of arbitrary size.
    pub fn new(width: u32, height: u32) -> Self {
        FrameBuffer { data: vec![0xff; buffer_len(width, height)], width, height }
    }

    /// A white buffer matching the configured panel.
    pub fn full_screen() -> Self { FrameBuffer::new(WIDTH, LINES) }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn as_bytes(&self) -> &[u8] { &self.data }

    pub fn as_canvas(&mut self) -> Canvas<'_> {
        Canvas { data: &mut self.data, width: self.width, height: self.height }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let byte = self.data[y as usize * stride(self.width) + x as usize / 2];
        Some(if x & 1 == 0 { byte & 0x0f } else { byte >> 4 })
    }

    pub fn clear(&mut self) { self.data.fill(0xff); }
}
