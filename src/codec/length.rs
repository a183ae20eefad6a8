//! Length codecs: match lengths as static prefix codes.
//!
//! Each codebook covers a small initial interval `[min, max]` with codes of
//! one to four bits.  Decoding peeks four bits and indexes a 16-entry table
//! mapping every 4-bit pattern to the unique code that prefixes it, then
//! pops only the code's width.  Two codebooks are flat 4-bit fields and
//! decode arithmetically instead.
//!
//! A match that saturates `max_initial_len` may be extended on the wire by
//! 4-bit continuation fields; `max_continued_len` is the saturation value
//! for those, or `None` for the one codebook that forbids continuation.

use crate::bitqueue::{BitFieldQueue, BitQueueError};
use crate::codec::CodeError;

// ─────────────────────────────────────────────────────────────────────────────
// Static code tables
//
// `codes[len - min]` is the `(value, width)` pair emitted for `len`;
// `table[pattern]` is the `(len, width)` decoded from a 4-bit peek.
// ─────────────────────────────────────────────────────────────────────────────

const CODES_1: &[(u8, u8)] = &[
    (0b00, 2),
    (0b01, 2),
    (0b10, 2),
    (0b1100, 4),
    (0b1101, 4),
    (0b1110, 4),
    (0b1111, 4),
];
const TABLE_1: &[(u8, u8); 16] = &[
    (2, 2),
    (2, 2),
    (2, 2),
    (2, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (4, 2),
    (4, 2),
    (4, 2),
    (4, 2),
    (5, 4),
    (6, 4),
    (7, 4),
    (8, 4),
];

const CODES_2: &[(u8, u8)] = &[
    (0b0, 1),
    (0b10, 2),
    (0b1100, 4),
    (0b1101, 4),
    (0b1110, 4),
    (0b1111, 4),
];
const TABLE_2: &[(u8, u8); 16] = &[
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (3, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (4, 4),
    (5, 4),
    (6, 4),
    (7, 4),
];

const CODES_3: &[(u8, u8)] = &[(0b0, 1), (0b10, 2), (0b110, 3), (0b1110, 4), (0b1111, 4)];
const TABLE_3: &[(u8, u8); 16] = &[
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (2, 1),
    (3, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (4, 3),
    (4, 3),
    (5, 4),
    (6, 4),
];

const CODES_4: &[(u8, u8)] = &[
    (0b00, 2),
    (0b01, 2),
    (0b100, 3),
    (0b101, 3),
    (0b1100, 4),
    (0b1101, 4),
    (0b1110, 4),
    (0b1111, 4),
];
const TABLE_4: &[(u8, u8); 16] = &[
    (2, 2),
    (2, 2),
    (2, 2),
    (2, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (4, 3),
    (4, 3),
    (5, 3),
    (5, 3),
    (6, 4),
    (7, 4),
    (8, 4),
    (9, 4),
];

const CODES_5: &[(u8, u8)] = &[
    (0b00, 2),
    (0b01, 2),
    (0b10, 2),
    (0b110, 3),
    (0b1110, 4),
    (0b1111, 4),
];
const TABLE_5: &[(u8, u8); 16] = &[
    (2, 2),
    (2, 2),
    (2, 2),
    (2, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (3, 2),
    (4, 2),
    (4, 2),
    (4, 2),
    (4, 2),
    (5, 3),
    (5, 3),
    (6, 4),
    (7, 4),
];

const CODES_6: &[(u8, u8)] = &[
    (0b000, 3),
    (0b001, 3),
    (0b010, 3),
    (0b011, 3),
    (0b100, 3),
    (0b101, 3),
    (0b110, 3),
    (0b1110, 4),
    (0b1111, 4),
];
const TABLE_6: &[(u8, u8); 16] = &[
    (2, 3),
    (2, 3),
    (3, 3),
    (3, 3),
    (4, 3),
    (4, 3),
    (5, 3),
    (5, 3),
    (6, 3),
    (6, 3),
    (7, 3),
    (7, 3),
    (8, 3),
    (8, 3),
    (9, 4),
    (10, 4),
];

// ─────────────────────────────────────────────────────────────────────────────
// Codebook selector
// ─────────────────────────────────────────────────────────────────────────────

/// The shipped length codebooks.
///
/// Codebook 1 is the classic LZS length coding.  Codebooks 2–6 trade the
/// initial range against code width in different ways; 7 and 8 are flat
/// 4-bit fields, and 8 forbids continuation (a single coded match cannot be
/// extended).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codebook {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
}

impl Codebook {
    /// Every shipped codebook, in numeric order.
    pub const ALL: [Codebook; 8] = [
        Codebook::C1,
        Codebook::C2,
        Codebook::C3,
        Codebook::C4,
        Codebook::C5,
        Codebook::C6,
        Codebook::C7,
        Codebook::C8,
    ];
}

// ─────────────────────────────────────────────────────────────────────────────
// LengthCode
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Kind {
    Prefix {
        codes: &'static [(u8, u8)],
        table: &'static [(u8, u8); 16],
    },
    Flat,
}

/// A static length codebook.
#[derive(Debug, Clone, Copy)]
pub struct LengthCode {
    min_initial: u16,
    max_initial: u16,
    max_continued: Option<u16>,
    kind: Kind,
}

impl LengthCode {
    /// Look up one of the shipped codebooks.
    pub const fn codebook(which: Codebook) -> Self {
        match which {
            Codebook::C1 => Self::prefix(2, 8, CODES_1, TABLE_1),
            Codebook::C2 => Self::prefix(2, 7, CODES_2, TABLE_2),
            Codebook::C3 => Self::prefix(2, 6, CODES_3, TABLE_3),
            Codebook::C4 => Self::prefix(2, 9, CODES_4, TABLE_4),
            Codebook::C5 => Self::prefix(2, 7, CODES_5, TABLE_5),
            Codebook::C6 => Self::prefix(2, 10, CODES_6, TABLE_6),
            Codebook::C7 => Self {
                min_initial: 2,
                max_initial: 16,
                max_continued: Some(15),
                kind: Kind::Flat,
            },
            Codebook::C8 => Self {
                min_initial: 3,
                max_initial: 16,
                max_continued: None,
                kind: Kind::Flat,
            },
        }
    }

    const fn prefix(
        min_initial: u16,
        max_initial: u16,
        codes: &'static [(u8, u8)],
        table: &'static [(u8, u8); 16],
    ) -> Self {
        Self {
            min_initial,
            max_initial,
            max_continued: Some(15),
            kind: Kind::Prefix { codes, table },
        }
    }

    /// Smallest length an initial match may carry.
    #[inline]
    pub fn min_initial_len(&self) -> u16 {
        self.min_initial
    }

    /// Largest length an initial match may carry.
    #[inline]
    pub fn max_initial_len(&self) -> u16 {
        self.max_initial
    }

    /// Saturation value for continuation fields, or `None` when the codebook
    /// does not support continuation.
    #[inline]
    pub fn max_continued_len(&self) -> Option<u16> {
        self.max_continued
    }

    /// Encode an initial match length into a bit field.
    ///
    /// Fails with [`CodeError::LengthOutOfRange`] outside
    /// `[min_initial_len, max_initial_len]`.
    pub fn encode(&self, length: u16) -> Result<BitFieldQueue, CodeError> {
        if length < self.min_initial || length > self.max_initial {
            return Err(CodeError::LengthOutOfRange(length));
        }
        let index = (length - self.min_initial) as usize;
        match self.kind {
            Kind::Prefix { codes, .. } => {
                let (value, width) = codes[index];
                Ok(BitFieldQueue::from_raw(value as u32, width as u32))
            }
            Kind::Flat => Ok(BitFieldQueue::from_raw(index as u32, 4)),
        }
    }

    /// Pop and decode one length field from the front of `bits`.
    ///
    /// Flat codebooks can yield a value above `max_initial_len` on a
    /// malformed stream; the caller is responsible for range-checking the
    /// result.
    pub fn decode(&self, bits: &mut BitFieldQueue) -> Result<u16, BitQueueError> {
        match self.kind {
            Kind::Prefix { table, .. } => {
                let (length, width) = table[bits.get(4)? as usize];
                bits.pop(width as u32)?;
                Ok(length as u16)
            }
            Kind::Flat => Ok(bits.pop(4)? as u16 + self.min_initial),
        }
    }
}
