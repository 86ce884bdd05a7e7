// Font data is stored as three tables produced by the font compiler:
//  - INTERVALS: sorted, non-overlapping codepoint ranges. Each range names the index in
//    GLYPHS of its first codepoint; the rest of the range follows contiguously.
//  - GLYPHS: placement metadata plus the location of the compressed bitmap.
//  - BITMAP: zlib streams, one per glyph, each inflating to width * height bytes of
//    8-bit intensity (row-major, top row first).
// So, to find a glyph we do:
//  1. Walk INTERVALS until the codepoint falls inside one, or is below the next start
//  2. Add (codepoint - first) to the interval's glyph offset
//  3. Inflate BITMAP[data_offset..data_offset + compressed_size] when drawing

/// A run of consecutive codepoints covered by the font.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnicodeInterval {
    pub first: u32,
    pub last: u32,
    /// Index into the glyph table of the glyph for `first`
    pub offset: u32,
}

impl UnicodeInterval {
    pub const fn new(first: u32, last: u32, offset: u32) -> Self { UnicodeInterval { first, last, offset } }

    pub fn contains(&self, codepoint: u32) -> bool { codepoint >= self.first && codepoint <= self.last }
}

/// Placement metadata and bitmap location for one character.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    pub width: u8,
    pub height: u8,
    /// Horizontal pen movement after drawing
    pub advance_x: u8,
    /// Distance from the pen to the left edge of the bitmap
    pub left: i16,
    /// Distance from the baseline up to the top row of the bitmap
    pub top: i16,
    pub compressed_size: u32,
    pub data_offset: u32,
}

impl Glyph {
    /// Size in bytes of the inflated bitmap.
    pub fn bitmap_len(&self) -> usize { self.width as usize * self.height as usize }
}

/// A compiled bitmap font with 4 bit grayscale glyphs.
///
/// Offsets inside `glyphs` and `bitmap` are trusted: the font compiler is responsible for
/// keeping them in range, and intervals must be sorted by `first` and never overlap.
#[derive(Copy, Clone, Debug)]
pub struct Font<'a> {
    pub bitmap: &'a [u8],
    pub glyphs: &'a [Glyph],
    pub intervals: &'a [UnicodeInterval],
    /// Vertical distance between successive baselines
    pub advance_y: u16,
    pub ascender: i16,
    pub descender: i16,
}

impl<'a> Font<'a> {
    /// Look up the glyph for `codepoint`. Fonts have sparse coverage, so `None` is an
    /// ordinary answer.
    pub fn glyph(&self, codepoint: u32) -> Option<&'a Glyph> {
        for interval in self.intervals {
            if interval.contains(codepoint) {
                let index = interval.offset as usize + (codepoint - interval.first) as usize;
                return self.glyphs.get(index);
            }
            if codepoint < interval.first {
                // intervals are sorted; nothing further can match
                return None;
            }
        }
        None
    }

    pub fn contains(&self, codepoint: u32) -> bool { self.glyph(codepoint).is_some() }

    /// The compressed stream for `glyph`, or `None` if the glyph points outside the
    /// bitmap blob.
    pub(crate) fn glyph_data(&self, glyph: &Glyph) -> Option<&'a [u8]> {
        let start = glyph.data_offset as usize;
        self.bitmap.get(start..start.checked_add(glyph.compressed_size as usize)?)
    }
}
