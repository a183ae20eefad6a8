//! Match finder and bitstream emitter.
//!
//! Compression is greedy and deterministic: at each cursor position the
//! dictionary is probed longest-fragment-first, the winning match (most
//! recent source offset) is extended byte-for-byte up to the codebook's
//! initial maximum, and a saturated match is prolonged with continuation
//! fields while the source keeps matching.  No lookahead is performed.
//!
//! The emitter packs the resulting token stream through the bit queue,
//! draining a byte at a time, and terminates it with the offset codec's end
//! marker plus zero padding to a byte boundary.

use core::fmt;

use crate::bitqueue::{BitFieldQueue, BitQueueError};
use crate::codec::{CodeError, Offset, OffsetCode};
use crate::engine::dict::MatchDict;
use crate::engine::{Coder, Token};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors surfaced while packing a token stream.
///
/// These indicate the token stream does not fit the codec pair it is being
/// packed with (or was corrupted by the caller) — a programmer error, not a
/// data-dependent condition.  Compression aborts; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A bit-queue invariant was violated.
    Bits(BitQueueError),
    /// A token value is not expressible by the active codebook.
    Code(CodeError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Bits(err) => err.fmt(f),
            EncodeError::Code(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<BitQueueError> for EncodeError {
    fn from(err: BitQueueError) -> Self {
        EncodeError::Bits(err)
    }
}

impl From<CodeError> for EncodeError {
    fn from(err: CodeError) -> Self {
        EncodeError::Code(err)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Match finder
// ─────────────────────────────────────────────────────────────────────────────

impl<O: OffsetCode> Coder<O> {
    /// Compress `input` into a token stream.
    ///
    /// Every emitted match satisfies the codec pair's limits by
    /// construction: distances never exceed the offset codec's maximum
    /// (stale dictionary entries are evicted as the window slides) and
    /// initial lengths stay within the codebook's range.
    pub fn compress(&self, input: &[u8]) -> Vec<Token> {
        let min_len = self.lengths.min_initial_len() as usize;
        let max_initial = self.lengths.max_initial_len() as usize;
        let max_offset = self.offsets.max_offset() as usize;
        let mut dict = MatchDict::new(
            input,
            min_len,
            self.max_dict_search_len as usize,
            max_offset,
        );

        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let Some((source, found_len)) = dict.find(pos) else {
                tokens.push(Token::Literal(input[pos]));
                dict.register(pos);
                pos += 1;
                continue;
            };

            // Extend the dictionary hit up to the codebook maximum.  The
            // comparison may run past the cursor into bytes the match itself
            // will produce; the reconstructor's per-byte copy handles that.
            let mut length = found_len;
            for candidate in (found_len + 1..=max_initial).rev() {
                if pos + candidate <= input.len()
                    && input[pos..pos + candidate] == input[source..source + candidate]
                {
                    length = candidate;
                    break;
                }
            }

            tokens.push(Token::Match {
                distance: (pos - source) as u32,
                length: length as u16,
            });
            for covered in pos..pos + length {
                dict.register(covered);
            }
            pos += length;
            let mut source_cursor = source + length;

            // A saturated match is prolonged from the same sliding source.
            // The terminating continuation may be empty; it still must be
            // emitted so the decoder knows the run is over.
            if length == max_initial {
                if let Some(max_continued) = self.lengths.max_continued_len() {
                    let max_continued = max_continued as usize;
                    loop {
                        let mut extra = 0;
                        for candidate in (1..=max_continued).rev() {
                            if pos + candidate <= input.len()
                                && input[pos..pos + candidate]
                                    == input[source_cursor..source_cursor + candidate]
                            {
                                extra = candidate;
                                break;
                            }
                        }
                        tokens.push(Token::Continuation(extra as u16));
                        for covered in pos..pos + extra {
                            dict.register(covered);
                        }
                        pos += extra;
                        source_cursor += extra;
                        if extra != max_continued {
                            break;
                        }
                    }
                }
            }
        }
        tokens
    }

    // ─────────────────────────────────────────────────────────────────────
    // Bitstream emitter
    // ─────────────────────────────────────────────────────────────────────

    /// Pack a token stream into wire bytes.
    ///
    /// Layout per token: literals are a `0` tag plus eight bits of the byte
    /// (MSB first); matches are a `1` tag, the coded distance, then the
    /// coded length; continuations are a bare 4-bit field.  The stream ends
    /// with a `1` tag plus the offset codec's end marker, padded with zero
    /// bits to the next byte boundary.
    pub fn encode(&self, tokens: &[Token]) -> Result<Vec<u8>, EncodeError> {
        let mut bits = BitFieldQueue::empty();
        let mut out = Vec::new();
        for &token in tokens {
            match token {
                Token::Literal(byte) => {
                    bits.append(BitFieldQueue::from_raw(0, 1))?;
                    bits.append(BitFieldQueue::from_raw(byte as u32, 8))?;
                }
                Token::Match { distance, length } => {
                    bits.append(BitFieldQueue::from_raw(1, 1))?;
                    bits.append(self.offsets.encode(Offset::Distance(distance))?)?;
                    bits.append(self.lengths.encode(length)?)?;
                }
                Token::Continuation(length) => {
                    bits.append(BitFieldQueue::new(length as u32, 4)?)?;
                }
            }
            drain(&mut bits, &mut out)?;
        }

        bits.append(BitFieldQueue::from_raw(1, 1))?;
        bits.append(self.offsets.encode(Offset::End)?)?;
        let padding = 7 - ((bits.width() + 7) % 8);
        bits.append(BitFieldQueue::new(0, padding)?)?;
        drain(&mut bits, &mut out)?;

        Ok(out)
    }
}

/// Move every complete byte out of the queue into the output.
fn drain(bits: &mut BitFieldQueue, out: &mut Vec<u8>) -> Result<(), BitQueueError> {
    while bits.width() >= 8 {
        out.push(bits.pop(8)? as u8);
    }
    Ok(())
}
