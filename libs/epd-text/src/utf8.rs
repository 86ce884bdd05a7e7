//! UTF-8 decoding for the text renderer.
//!
//! The decoder is deliberately forgiving: continuation bytes are not checked for their
//! `10` prefix, so a damaged sequence turns into one wrong codepoint instead of stopping
//! the render. A byte that cannot start a sequence at all is replaced by U+FFFD.

/// Unicode replacement character, emitted for undecodable lead bytes
pub const REPLACEMENT: u32 = 0xFFFD;

/// One row of the decode table. A byte belongs to the class when
/// `byte & !mask == lead`; `bits` is how many payload bits that byte carries.
#[derive(Copy, Clone, Debug)]
struct ByteClass {
    mask: u8,
    lead: u8,
    bits: u32,
}

/// Index 0 is the continuation byte, index `n` the lead byte of an `n` byte sequence.
const UTF8: [ByteClass; 5] = [
    ByteClass { mask: 0b0011_1111, lead: 0b1000_0000, bits: 6 },
    ByteClass { mask: 0b0111_1111, lead: 0b0000_0000, bits: 7 },
    ByteClass { mask: 0b0001_1111, lead: 0b1100_0000, bits: 5 },
    ByteClass { mask: 0b0000_1111, lead: 0b1110_0000, bits: 4 },
    ByteClass { mask: 0b0000_0111, lead: 0b1111_0000, bits: 3 },
];

/// Length of the sequence introduced by `lead`, or `None` if `lead` is a stray
/// continuation byte or would need five or more bytes.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match UTF8.iter().position(|class| lead & !class.mask == class.lead) {
        Some(0) | None => None,
        Some(len) => Some(len),
    }
}

/// Decode the codepoint at the front of `text` and advance `text` past it.
///
/// Returns 0 at the end of the slice or at a NUL lead byte; neither advances the slice.
/// Embedded NUL characters therefore end the string.
pub fn next_codepoint(text: &mut &[u8]) -> u32 {
    let bytes = *text;
    let lead = match bytes.first() {
        Some(&b) if b != 0 => b,
        _ => return 0,
    };
    let len = match sequence_len(lead) {
        Some(len) => len,
        None => {
            log::warn!("malformed utf-8 lead byte {:#04x}", lead);
            *text = &bytes[1..];
            return REPLACEMENT;
        }
    };
    if bytes.len() < len {
        log::warn!("utf-8 sequence truncated: need {} bytes, have {}", len, bytes.len());
        *text = &[];
        return REPLACEMENT;
    }
    let (seq, rest) = bytes.split_at(len);
    *text = rest;

    let cont = &UTF8[0];
    let mut shift = cont.bits * (len as u32 - 1);
    let mut codepoint = ((seq[0] & UTF8[len].mask) as u32) << shift;
    for &b in &seq[1..] {
        shift -= cont.bits;
        codepoint |= ((b & cont.mask) as u32) << shift;
    }
    codepoint
}

/// Iterator over the codepoints of a byte string, ending at the first NUL or the end of
/// the slice.
#[derive(Clone, Debug)]
pub struct Codepoints<'a> {
    rest: &'a [u8],
}

impl<'a> Codepoints<'a> {
    pub fn new(text: &'a [u8]) -> Self { Codepoints { rest: text } }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] { self.rest }
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match next_codepoint(&mut self.rest) {
            0 => None,
            cp => Some(cp),
        }
    }
}
