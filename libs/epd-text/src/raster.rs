use miniz_oxide::inflate::decompress_to_vec_zlib_with_limit;

use crate::bounds::{Cursor, Rect};
use crate::canvas::Canvas;
use crate::font::{Font, Glyph};

/// What happened to one codepoint handed to [`draw_char`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// At least part of the glyph landed on the canvas.
    Drawn,
    /// The glyph lies entirely outside the canvas; its bitmap was never inflated.
    Clipped,
    /// The font has no glyph for the codepoint. The pen did not move.
    Missing,
    /// The glyph bitmap failed to inflate. Nothing was drawn but the pen advanced.
    Corrupt,
}

/// Inflate the bitmap of `glyph`. `None` on a broken or wrongly sized stream.
fn inflate_glyph(font: &Font<'_>, glyph: &Glyph) -> Option<Vec<u8>> {
    let expected = glyph.bitmap_len();
    if expected == 0 {
        return Some(Vec::new());
    }
    let Some(data) = font.glyph_data(glyph) else {
        log::warn!(
            "glyph data {}+{} lies outside the {} byte bitmap",
            glyph.data_offset,
            glyph.compressed_size,
            font.bitmap.len()
        );
        return None;
    };
    match decompress_to_vec_zlib_with_limit(data, expected) {
        Ok(bitmap) if bitmap.len() == expected => Some(bitmap),
        Ok(bitmap) => {
            log::warn!("glyph bitmap inflated to {} bytes, expected {}", bitmap.len(), expected);
            None
        }
        Err(err) => {
            log::warn!("couldn't inflate glyph bitmap: {:?}", err.status);
            None
        }
    }
}

/// Copy an inflated bitmap onto the canvas with its top left at (`area.x`, `area.y`).
/// Pixels outside the canvas are dropped one by one.
fn blit(canvas: &mut Canvas<'_>, area: Rect, bitmap: &[u8]) {
    if area.is_empty() {
        return;
    }
    for (row, line) in bitmap.chunks_exact(area.width as usize).enumerate() {
        let y = area.y + row as i32;
        for (col, &value) in line.iter().enumerate() {
            canvas.set_pixel(area.x + col as i32, y, value >> 4);
        }
    }
}

/// Draw `codepoint` with the pen at `pen`, then move the pen by the glyph's advance.
///
/// The pen advances whether the glyph was fully drawn, clipped or undecodable, so a
/// sequence of calls ends where [`crate::text_bounds`] says it will.
pub fn draw_char(font: &Font<'_>, canvas: &mut Canvas<'_>, pen: &mut Cursor, codepoint: u32) -> DrawOutcome {
    let Some(glyph) = font.glyph(codepoint) else {
        log::debug!("no glyph for U+{:04X}", codepoint);
        return DrawOutcome::Missing;
    };
    let area = Rect::of_glyph(glyph, *pen);
    pen.x += glyph.advance_x as i32;

    if area.right() <= 0
        || area.bottom() <= 0
        || area.x >= canvas.width() as i32
        || area.y >= canvas.height() as i32
    {
        log::trace!("U+{:04X} fully clipped at {:?}", codepoint, area);
        return DrawOutcome::Clipped;
    }
    match inflate_glyph(font, glyph) {
        Some(bitmap) => {
            blit(canvas, area, &bitmap);
            DrawOutcome::Drawn
        }
        None => DrawOutcome::Corrupt,
    }
}
