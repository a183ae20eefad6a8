//! Offset codecs: back-reference distances as variable- or fixed-width fields.
//!
//! Two families are provided.  [`SplitOffsetCode`] spends one tag bit to pick
//! between a short and a long fixed-width field, which pays off when most
//! matches are near; its *dense* variant biases the long field so the two
//! ranges do not overlap.  [`FlatOffsetCode`] is a single fixed-width field.
//!
//! Distance zero is reserved in both families: it encodes [`Offset::End`],
//! the end-of-stream marker.

use crate::bitqueue::{BitFieldQueue, BitQueueError};
use crate::codec::CodeError;

// ─────────────────────────────────────────────────────────────────────────────
// Offset value
// ─────────────────────────────────────────────────────────────────────────────

/// A decoded offset field: either a real back-reference distance or the
/// end-of-stream marker that shares its codepoint space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Distance back from the current output position, in bytes (>= 1 on any
    /// stream this crate produces).
    Distance(u32),
    /// End-of-stream marker (wire distance 0).
    End,
}

impl Offset {
    fn wire_value(self) -> u32 {
        match self {
            Offset::Distance(distance) => distance,
            Offset::End => 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability trait
// ─────────────────────────────────────────────────────────────────────────────

/// Capability set an offset codec exposes to the engine.
pub trait OffsetCode {
    /// Largest encodable distance; the sliding-window capacity is
    /// `max_offset() + 1`.
    fn max_offset(&self) -> u32;

    /// Encode an offset into a bit field.
    ///
    /// Fails with [`CodeError::OffsetTooLarge`] for distances beyond
    /// [`max_offset`](OffsetCode::max_offset).
    fn encode(&self, offset: Offset) -> Result<BitFieldQueue, CodeError>;

    /// Pop and decode one offset field from the front of `bits`.
    fn decode(&self, bits: &mut BitFieldQueue) -> Result<Offset, BitQueueError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Split codec (short/long tagged fields)
// ─────────────────────────────────────────────────────────────────────────────

/// Tagged short/long offset codec.
///
/// Wire layout: a 1-bit tag, then a fixed field — tag `1` is followed by
/// `short_bits` bits, tag `0` by `long_bits` bits.  In the base variant the
/// long field carries the raw distance, so `max_offset = 2^long_bits - 1`
/// and short-range distances have two encodings.  The dense variant stores
/// long distances biased by `max_short`, extending `max_offset` by
/// `2^short_bits - 1`.
#[derive(Debug, Clone, Copy)]
pub struct SplitOffsetCode {
    short_bits: u32,
    long_bits: u32,
    max_short: u32,
    long_bias: u32,
    max_offset: u32,
}

impl SplitOffsetCode {
    /// Base split codec.
    ///
    /// # Panics
    /// Panics unless `1 <= short_bits < long_bits <= 15`.
    pub fn new(short_bits: u32, long_bits: u32) -> Self {
        Self::with_bias(short_bits, long_bits, false)
    }

    /// Dense split codec: long offsets are stored biased by `max_short`.
    ///
    /// # Panics
    /// Panics unless `1 <= short_bits < long_bits <= 15`.
    pub fn dense(short_bits: u32, long_bits: u32) -> Self {
        Self::with_bias(short_bits, long_bits, true)
    }

    fn with_bias(short_bits: u32, long_bits: u32, dense: bool) -> Self {
        assert!(
            (1..=15).contains(&short_bits) && short_bits < long_bits && long_bits <= 15,
            "split offset codec requires 1 <= short_bits < long_bits <= 15"
        );
        let max_short = (1u32 << short_bits) - 1;
        let max_long = (1u32 << long_bits) - 1;
        let long_bias = if dense { max_short } else { 0 };
        Self {
            short_bits,
            long_bits,
            max_short,
            long_bias,
            max_offset: max_long + long_bias,
        }
    }
}

impl OffsetCode for SplitOffsetCode {
    fn max_offset(&self) -> u32 {
        self.max_offset
    }

    fn encode(&self, offset: Offset) -> Result<BitFieldQueue, CodeError> {
        let value = offset.wire_value();
        if value <= self.max_short {
            // Tag bit 1 sits just above the short field.
            Ok(BitFieldQueue::from_raw(
                (1 << self.short_bits) | value,
                self.short_bits + 1,
            ))
        } else if value <= self.max_offset {
            // Tag bit 0 is the implicit high bit of the widened field.
            Ok(BitFieldQueue::from_raw(
                value - self.long_bias,
                self.long_bits + 1,
            ))
        } else {
            Err(CodeError::OffsetTooLarge(value))
        }
    }

    fn decode(&self, bits: &mut BitFieldQueue) -> Result<Offset, BitQueueError> {
        if bits.pop(1)? != 0 {
            let value = bits.pop(self.short_bits)?;
            if value == 0 {
                Ok(Offset::End)
            } else {
                Ok(Offset::Distance(value))
            }
        } else {
            Ok(Offset::Distance(bits.pop(self.long_bits)? + self.long_bias))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flat codec (single fixed-width field)
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed-width offset codec: every distance is a flat `num_bits`-bit field.
#[derive(Debug, Clone, Copy)]
pub struct FlatOffsetCode {
    num_bits: u32,
    max_offset: u32,
}

impl FlatOffsetCode {
    /// # Panics
    /// Panics unless `1 <= num_bits <= 16`.
    pub fn new(num_bits: u32) -> Self {
        assert!(
            (1..=16).contains(&num_bits),
            "flat offset codec requires 1 <= num_bits <= 16"
        );
        Self {
            num_bits,
            max_offset: (1u32 << num_bits) - 1,
        }
    }
}

impl OffsetCode for FlatOffsetCode {
    fn max_offset(&self) -> u32 {
        self.max_offset
    }

    fn encode(&self, offset: Offset) -> Result<BitFieldQueue, CodeError> {
        let value = offset.wire_value();
        if value > self.max_offset {
            return Err(CodeError::OffsetTooLarge(value));
        }
        Ok(BitFieldQueue::from_raw(value, self.num_bits))
    }

    fn decode(&self, bits: &mut BitFieldQueue) -> Result<Offset, BitQueueError> {
        match bits.pop(self.num_bits)? {
            0 => Ok(Offset::End),
            value => Ok(Offset::Distance(value)),
        }
    }
}
