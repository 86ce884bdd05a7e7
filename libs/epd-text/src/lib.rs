//! Text rendering for 4 bit grayscale e-paper panels.
//!
//! Fonts are compiled ahead of time into a sorted table of codepoint intervals, a glyph
//! table and a blob of zlib compressed 8-bit bitmaps (see [`font`]). Strings are decoded
//! from UTF-8, measured, and drawn into nibble-packed buffers: two pixels per byte, even
//! columns in the low nibble.
//!
//! Two targets are supported:
//! - [`Target::Offscreen`]: every line is drawn into a buffer exactly as large as its
//!   bounding box, which is handed to a [`DisplayUpdate`] and freed.
//! - [`Target::Framebuffer`]: lines are drawn at absolute positions into a caller-owned
//!   buffer, so many writes can be collected before one panel refresh.
//!
//! Rendering never fails because of the text or the font. Undecodable bytes, codepoints
//! missing from the font, broken bitmaps and pixels outside the buffer are skipped glyph by
//! glyph; only running out of memory for an offscreen line is reported.
pub mod bounds;
pub use bounds::*;
pub mod canvas;
pub use canvas::*;
mod error;
pub use error::*;
pub mod font;
pub use font::*;
pub mod layout;
pub use layout::*;
pub mod platform;
pub mod raster;
pub use raster::*;
pub mod utf8;

#[cfg(test)]
mod testfont;
