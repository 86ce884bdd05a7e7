use core::fmt;

/// Faults that leave a render call. Everything else (bad UTF-8, missing glyphs,
/// corrupt bitmaps, clipped pixels) is absorbed glyph by glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The offscreen buffer for one line could not be reserved.
    Alloc { width: u32, height: u32 },
    /// A caller supplied byte slice is shorter than its declared dimensions require.
    BufferSize { needed: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alloc { width, height } => {
                write!(f, "couldn't allocate a {}x{} line buffer", width, height)
            }
            Error::BufferSize { needed, actual } => {
                write!(f, "buffer holds {} bytes but {} are needed", actual, needed)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
