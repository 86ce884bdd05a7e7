//! In-memory fonts for unit tests. Glyph bitmaps are generated from a fixed pattern and
//! compressed the same way the font compiler does it.
use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::font::{Font, Glyph, UnicodeInterval};

#[derive(Copy, Clone, Debug)]
pub struct GlyphSpec {
    pub width: u8,
    pub height: u8,
    pub left: i16,
    pub top: i16,
    pub advance_x: u8,
}

/// 8-bit source intensity of pixel (col, row) of the glyph for `cp`.
pub fn source_pixel(cp: u32, col: u32, row: u32) -> u8 { (((cp + col * 3 + row * 5) % 16) as u8) << 4 }

/// The 4 bit level that pixel should end up as in a packed buffer.
pub fn level(cp: u32, col: u32, row: u32) -> u8 { source_pixel(cp, col, row) >> 4 }

pub struct TestFont {
    bitmap: Vec<u8>,
    glyphs: Vec<Glyph>,
    intervals: Vec<UnicodeInterval>,
    advance_y: u16,
}

impl TestFont {
    pub fn build(mut specs: Vec<(u32, GlyphSpec)>, advance_y: u16) -> Self {
        specs.sort_by_key(|(cp, _)| *cp);
        let mut tf = TestFont { bitmap: Vec::new(), glyphs: Vec::new(), intervals: Vec::new(), advance_y };
        for (index, (cp, spec)) in specs.into_iter().enumerate() {
            let pixels: Vec<u8> = (0..spec.height as u32)
                .flat_map(|row| (0..spec.width as u32).map(move |col| source_pixel(cp, col, row)))
                .collect();
            let data = if pixels.is_empty() { Vec::new() } else { compress_to_vec_zlib(&pixels, 6) };
            tf.glyphs.push(Glyph {
                width: spec.width,
                height: spec.height,
                advance_x: spec.advance_x,
                left: spec.left,
                top: spec.top,
                compressed_size: data.len() as u32,
                data_offset: tf.bitmap.len() as u32,
            });
            tf.bitmap.extend_from_slice(&data);
            match tf.intervals.last_mut() {
                Some(interval) if interval.last + 1 == cp => interval.last = cp,
                _ => tf.intervals.push(UnicodeInterval::new(cp, cp, index as u32)),
            }
        }
        tf
    }

    /// One 2x2 glyph for 'A' sitting on the baseline, advance 3.
    pub fn single_a() -> Self {
        TestFont::build(vec![('A' as u32, GlyphSpec { width: 2, height: 2, left: 0, top: 2, advance_x: 3 })], 4)
    }

    /// Printable ASCII. Capitals and digits are 9 rows above the baseline, lowercase 6,
    /// and `gjpqy` hang 3 rows below it. Space is empty.
    pub fn ascii() -> Self {
        let specs = (0x20u32..=0x7e)
            .map(|cp| {
                let ch = char::from_u32(cp).unwrap_or(' ');
                let width = 3 + (cp % 3) as u8;
                let spec = match ch {
                    ' ' => GlyphSpec { width: 0, height: 0, left: 0, top: 0, advance_x: 4 },
                    'j' => GlyphSpec { width, height: 9, left: -1, top: 6, advance_x: width },
                    'g' | 'p' | 'q' | 'y' => GlyphSpec { width, height: 9, left: 1, top: 6, advance_x: width + 1 },
                    'a'..='z' => GlyphSpec { width, height: 6, left: 1, top: 6, advance_x: width + 1 },
                    _ => GlyphSpec { width, height: 9, left: 1, top: 9, advance_x: width + 1 },
                };
                (cp, spec)
            })
            .collect();
        TestFont::build(specs, 14)
    }

    pub fn font(&self) -> Font<'_> {
        Font {
            bitmap: &self.bitmap,
            glyphs: &self.glyphs,
            intervals: &self.intervals,
            advance_y: self.advance_y,
            ascender: 9,
            descender: -3,
        }
    }

    fn glyph_mut(&mut self, cp: u32) -> &mut Glyph {
        let interval = self.intervals.iter().find(|i| i.contains(cp)).copied().unwrap();
        &mut self.glyphs[(interval.offset + cp - interval.first) as usize]
    }

    /// Overwrite the compressed stream of `cp` so it no longer inflates.
    pub fn corrupt(&mut self, cp: u32) {
        let g = *self.glyph_mut(cp);
        let start = g.data_offset as usize;
        self.bitmap[start..start + g.compressed_size as usize].fill(0xff);
    }

    /// Declare a bigger bitmap than the stream holds.
    pub fn grow(&mut self, cp: u32) { self.glyph_mut(cp).height += 1; }
}
