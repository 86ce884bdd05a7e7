use crate::font::{Font, Glyph};
use crate::utf8::Codepoints;

/// Pen position. `y` sits on the baseline; increasing `y` moves down the panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub const fn new(x: i32, y: i32) -> Self { Cursor { x, y } }
}

/// An area of the panel. (0,0) is top left; `x..x + width` and `y..y + height` are the
/// covered pixel ranges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self { Rect { x, y, width, height } }

    pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 { self.x + self.width as i32 }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 { self.y + self.height as i32 }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect { Rect { x: self.x + dx, y: self.y + dy, ..*self } }

    /// Where `glyph` lands when drawn with the pen at `pen`.
    pub fn of_glyph(glyph: &Glyph, pen: Cursor) -> Rect {
        Rect::new(
            pen.x + glyph.left as i32,
            pen.y - glyph.top as i32,
            glyph.width as u32,
            glyph.height as u32,
        )
    }
}

/// Running min/max over a set of rectangles. Starts out inverted so that the first
/// rectangle added sets every edge.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Extent {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Extent {
    pub fn new() -> Self { Extent { min_x: i32::MAX, min_y: i32::MAX, max_x: i32::MIN, max_y: i32::MIN } }

    pub fn is_empty(&self) -> bool { self.min_x > self.max_x || self.min_y > self.max_y }

    /// Grow to cover `r`. Rectangles without area cover no pixels and are ignored.
    pub fn add(&mut self, r: Rect) {
        if r.is_empty() {
            return;
        }
        self.min_x = self.min_x.min(r.x);
        self.min_y = self.min_y.min(r.y);
        self.max_x = self.max_x.max(r.right());
        self.max_y = self.max_y.max(r.bottom());
    }

    /// The covered rectangle, or a zero sized one at `origin` if nothing was added.
    pub fn to_rect(&self, origin: Cursor) -> Rect {
        if self.is_empty() {
            return Rect::new(origin.x, origin.y, 0, 0);
        }
        Rect::new(self.min_x, self.min_y, (self.max_x - self.min_x) as u32, (self.max_y - self.min_y) as u32)
    }
}

/// Add the area `codepoint` would cover at `pen` to `extent` and move the pen past it.
/// Codepoints the font lacks contribute nothing, not even an advance.
pub(crate) fn char_bounds(font: &Font<'_>, codepoint: u32, pen: &mut Cursor, extent: &mut Extent) {
    let Some(glyph) = font.glyph(codepoint) else {
        return;
    };
    extent.add(Rect::of_glyph(glyph, *pen));
    pen.x += glyph.advance_x as i32;
}

/// Exact area covered by the glyphs of a single line drawn with the pen starting at
/// `origin`. Nothing is rasterized. If no codepoint has a visible glyph, the result is a
/// zero sized rectangle at `origin`.
///
/// Line breaks are not interpreted here; see [`crate::string_bounds`] for multi-line text.
pub fn text_bounds(font: &Font<'_>, text: impl AsRef<[u8]>, origin: Cursor) -> Rect {
    let mut pen = origin;
    let mut extent = Extent::new();
    for cp in Codepoints::new(text.as_ref()) {
        char_bounds(font, cp, &mut pen, &mut extent);
    }
    extent.to_rect(origin)
}
