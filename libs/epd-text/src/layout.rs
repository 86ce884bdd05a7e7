//! Line layout: splits text on `\n`, measures each line and draws it either into a
//! buffer sized to the line or straight into a caller-owned frame buffer.
use crate::bounds::{char_bounds, text_bounds, Cursor, Extent, Rect};
use crate::canvas::{buffer_len, Canvas};
use crate::error::{Error, Result};
use crate::font::Font;
use crate::raster::draw_char;
use crate::utf8::Codepoints;

/// Receiver for finished offscreen lines, typically the panel driver.
pub trait DisplayUpdate {
    /// Push `image` to the panel at `area`. `image` is packed 4 bit grayscale with rows of
    /// `(area.width + 1) / 2` bytes. It is released as soon as this returns.
    fn draw_grayscale_image(&mut self, area: Rect, image: &[u8]);
}

impl<F> DisplayUpdate for F
where
    F: FnMut(Rect, &[u8]),
{
    fn draw_grayscale_image(&mut self, area: Rect, image: &[u8]) { self(area, image) }
}

/// Where rendered text goes.
pub enum Target<'a> {
    /// Render each line into a temporary buffer exactly as large as the line, hand it to
    /// the display, then free it.
    Offscreen(&'a mut dyn DisplayUpdate),
    /// Render at absolute positions into a caller-owned buffer. Nothing is sent to the
    /// display; the caller decides when to refresh.
    Framebuffer(Canvas<'a>),
}

/// Cut `text` at its first NUL, which ends the string.
fn terminated(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Draw one line of text with its baseline at `cursor.y`, starting at `cursor.x`.
///
/// Line breaks in `line` are not interpreted. Only allocation of the offscreen buffer can
/// fail; in that case nothing reaches the display.
pub fn writeln(font: &Font<'_>, line: &[u8], cursor: Cursor, target: &mut Target<'_>) -> Result<()> {
    match target {
        Target::Offscreen(display) => {
            let area = text_bounds(font, line, cursor);
            if area.is_empty() {
                log::debug!("nothing visible on line at {:?}", cursor);
                return Ok(());
            }
            let len = buffer_len(area.width, area.height);
            let mut buffer = Vec::new();
            if buffer.try_reserve_exact(len).is_err() {
                log::error!("out of memory for {}x{} line buffer", area.width, area.height);
                return Err(Error::Alloc { width: area.width, height: area.height });
            }
            buffer.resize(len, 0xff);
            let mut canvas = Canvas::new(&mut buffer, area.width, area.height)?;
            // the line buffer's (0, 0) is the top left of `area`
            let mut pen = Cursor::new(cursor.x - area.x, cursor.y - area.y);
            for cp in Codepoints::new(line) {
                draw_char(font, &mut canvas, &mut pen, cp);
            }
            log::trace!("line ready at {:?}", area);
            display.draw_grayscale_image(area, canvas.data());
            Ok(())
        }
        Target::Framebuffer(canvas) => {
            let mut pen = cursor;
            for cp in Codepoints::new(line) {
                draw_char(font, canvas, &mut pen, cp);
            }
            Ok(())
        }
    }
}

/// Write `text`, one line per `\n`, starting at `cursor`.
///
/// Every line starts at the original `cursor.x`. After each line `cursor.y` moves down by
/// the font's line advance, whatever the line contained, so on return `cursor.y` has grown
/// by `lines * advance_y` and `cursor.x` is unchanged. Text after a NUL byte is ignored.
pub fn write_string(
    font: &Font<'_>,
    text: impl AsRef<[u8]>,
    cursor: &mut Cursor,
    mut target: Target<'_>,
) -> Result<()> {
    let line_start = cursor.x;
    for line in terminated(text.as_ref()).split(|&b| b == b'\n') {
        cursor.x = line_start;
        writeln(font, line, *cursor, &mut target)?;
        cursor.y += font.advance_y as i32;
    }
    Ok(())
}

/// The area [`write_string`] would cover for `text` starting at `origin`, over all lines.
/// A zero sized rectangle at `origin` if nothing would be visible.
pub fn string_bounds(font: &Font<'_>, text: impl AsRef<[u8]>, origin: Cursor) -> Rect {
    let mut extent = Extent::new();
    let mut baseline = origin.y;
    for line in terminated(text.as_ref()).split(|&b| b == b'\n') {
        let mut pen = Cursor::new(origin.x, baseline);
        for cp in Codepoints::new(line) {
            char_bounds(font, cp, &mut pen, &mut extent);
        }
        baseline += font.advance_y as i32;
    }
    extent.to_rect(origin)
}
