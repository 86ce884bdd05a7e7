// Panel geometry is selected at compile time. `ed060sc4` wins if both are enabled so that
// `--features ed060sc4` works without `--no-default-features`.
#[cfg(not(feature = "ed060sc4"))]
mod ed047tc1;
#[cfg(not(feature = "ed060sc4"))]
pub use ed047tc1::*;

#[cfg(feature = "ed060sc4")]
mod ed060sc4;
#[cfg(feature = "ed060sc4")]
pub use ed060sc4::*;

/// Bytes in one packed row of the panel: two 4-bit pixels per byte.
pub const BYTES_PER_LINE: usize = (WIDTH as usize + 1) / 2;
pub const FB_SIZE: usize = BYTES_PER_LINE * LINES as usize;
