//! Bitstream parser and sliding-window reconstructor.
//!
//! Parsing reads tags, offset fields and length fields out of the bit queue,
//! which is topped up from the input whenever it holds 23 bits or fewer —
//! enough headroom to decode the widest single token any shipped codec pair
//! produces.  Reconstruction replays the token stream against a circular
//! history buffer, copying match bytes one at a time so that a reference
//! whose tail overlaps the bytes being produced reads back what it just
//! wrote (run-length extension).
//!
//! Every failure on this path — queue underflow, an out-of-range decoded
//! length, a cursor outside the live window, a continuation with no
//! preceding match — means the input bytes were not produced by the active
//! codec pair, and surfaces as [`DecodeError::MalformedStream`].

use core::fmt;
use core::slice;

use crate::bitqueue::{BitFieldQueue, BitQueueError};
use crate::codec::{Offset, OffsetCode};
use crate::engine::{Coder, Token};
use crate::history::{HistoryBuffer, HistoryError};

/// Refill the queue whenever it holds this many bits or fewer.
const REFILL_THRESHOLD: u32 = 23;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// The input bitstream or token stream is not a valid product of the active
/// codec pair.
///
/// There is no integrity check in the wire format: input truncated at a
/// token boundary whose remaining bits happen to decode cleanly is
/// indistinguishable from a complete stream and is *not* reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A parsed field or token implies an illegal state.
    MalformedStream,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedStream => f.write_str("malformed compressed stream"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<BitQueueError> for DecodeError {
    fn from(_: BitQueueError) -> Self {
        DecodeError::MalformedStream
    }
}

impl From<HistoryError> for DecodeError {
    fn from(_: HistoryError) -> Self {
        DecodeError::MalformedStream
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Token parser
// ─────────────────────────────────────────────────────────────────────────────

/// Lazy token parser returned by [`Coder::gen_decode`].
///
/// Single-pass and fused: after yielding an error it yields nothing further.
pub struct Tokens<'a, O: OffsetCode> {
    coder: &'a Coder<O>,
    input: slice::Iter<'a, u8>,
    bits: BitFieldQueue,
    in_continuation: bool,
    failed: bool,
}

impl<O: OffsetCode> Tokens<'_, O> {
    /// Top the queue up past the refill threshold (or drain the input).
    fn fill(&mut self) {
        while self.bits.width() <= REFILL_THRESHOLD {
            let Some(&byte) = self.input.next() else {
                break;
            };
            // 23 + 8 + 1 stays within the register; the append cannot fail.
            let _ = self.bits.append(BitFieldQueue::from_raw(byte as u32, 8));
        }
    }

    fn step(&mut self) -> Result<Option<Token>, DecodeError> {
        if self.in_continuation {
            self.fill();
            let length = self.bits.pop(4)? as u16;
            if Some(length) != self.coder.lengths.max_continued_len() {
                self.in_continuation = false;
            }
            return Ok(Some(Token::Continuation(length)));
        }
        loop {
            self.fill();
            if self.bits.is_empty() {
                return Ok(None);
            }
            if self.bits.pop(1)? == 0 {
                return Ok(Some(Token::Literal(self.bits.pop(8)? as u8)));
            }
            match self.coder.offsets.decode(&mut self.bits)? {
                Offset::End => {
                    // Drop the fractional padding byte; anything beyond it is
                    // a further concatenated stream and keeps parsing.
                    let fraction = self.bits.width() % 8;
                    self.bits.pop(fraction)?;
                }
                Offset::Distance(distance) => {
                    let length = self.coder.lengths.decode(&mut self.bits)?;
                    if length > self.coder.lengths.max_initial_len() {
                        return Err(DecodeError::MalformedStream);
                    }
                    if length == self.coder.lengths.max_initial_len()
                        && self.coder.lengths.max_continued_len().is_some()
                    {
                        self.in_continuation = true;
                    }
                    return Ok(Some(Token::Match { distance, length }));
                }
            }
        }
    }
}

impl<O: OffsetCode> Iterator for Tokens<'_, O> {
    type Item = Result<Token, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.step() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reconstructor
// ─────────────────────────────────────────────────────────────────────────────

/// Lazy byte reconstructor returned by [`Coder::gen_decompress`].
///
/// Yields output bytes in exact order as soon as each is reconstructed; a
/// yielded prefix never changes.  Single-pass and fused.
pub struct Bytes<I> {
    tokens: I,
    history: HistoryBuffer,
    distance: Option<usize>,
    remaining: u16,
    failed: bool,
}

impl<I> Iterator for Bytes<I>
where
    I: Iterator<Item = Result<Token, DecodeError>>,
{
    type Item = Result<u8, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if self.remaining > 0 {
                self.remaining -= 1;
                // `distance` is always set while a copy is in progress.
                let back = match self.distance {
                    Some(distance) => -(distance as isize),
                    None => {
                        self.failed = true;
                        return Some(Err(DecodeError::MalformedStream));
                    }
                };
                match self.history.get(back) {
                    Ok(byte) => {
                        self.history.push(byte);
                        return Some(Ok(byte));
                    }
                    Err(_) => {
                        self.failed = true;
                        return Some(Err(DecodeError::MalformedStream));
                    }
                }
            }
            match self.tokens.next() {
                None => return None,
                Some(Err(err)) => {
                    self.failed = true;
                    return Some(Err(err));
                }
                Some(Ok(Token::Literal(byte))) => {
                    self.history.push(byte);
                    return Some(Ok(byte));
                }
                Some(Ok(Token::Match { distance, length })) => {
                    if distance == 0 {
                        self.failed = true;
                        return Some(Err(DecodeError::MalformedStream));
                    }
                    self.distance = Some(distance as usize);
                    self.remaining = length;
                }
                Some(Ok(Token::Continuation(length))) => {
                    if self.distance.is_none() {
                        self.failed = true;
                        return Some(Err(DecodeError::MalformedStream));
                    }
                    self.remaining = length;
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Coder entry points
// ─────────────────────────────────────────────────────────────────────────────

impl<O: OffsetCode> Coder<O> {
    /// Parse wire bytes into a lazy token stream.
    pub fn gen_decode<'a>(&'a self, input: &'a [u8]) -> Tokens<'a, O> {
        Tokens {
            coder: self,
            input: input.iter(),
            bits: BitFieldQueue::empty(),
            in_continuation: false,
            failed: false,
        }
    }

    /// Parse wire bytes into a token list.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<Token>, DecodeError> {
        self.gen_decode(input).collect()
    }

    /// Reconstruct the original bytes from a token list.
    pub fn decompress(&self, tokens: &[Token]) -> Result<Vec<u8>, DecodeError> {
        let mut out: Vec<u8> = Vec::new();
        let mut distance: Option<usize> = None;
        for &token in tokens {
            match token {
                Token::Literal(byte) => out.push(byte),
                Token::Match {
                    distance: new_distance,
                    length,
                } => {
                    let new_distance = new_distance as usize;
                    if new_distance == 0 || new_distance > out.len() {
                        return Err(DecodeError::MalformedStream);
                    }
                    distance = Some(new_distance);
                    for _ in 0..length {
                        let byte = out[out.len() - new_distance];
                        out.push(byte);
                    }
                }
                Token::Continuation(length) => {
                    let Some(distance) = distance else {
                        return Err(DecodeError::MalformedStream);
                    };
                    for _ in 0..length {
                        let byte = out[out.len() - distance];
                        out.push(byte);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Reconstruct lazily, one byte per step, from any token source.
    ///
    /// Chains directly onto [`gen_decode`](Coder::gen_decode); a plain token
    /// list can be fed with `tokens.iter().copied().map(Ok)`.  The history
    /// ring is sized from the offset codec, so memory stays bounded no
    /// matter how long the output is.
    pub fn gen_decompress<I>(&self, tokens: I) -> Bytes<I::IntoIter>
    where
        I: IntoIterator<Item = Result<Token, DecodeError>>,
    {
        Bytes {
            tokens: tokens.into_iter(),
            history: HistoryBuffer::new(self.history_capacity()),
            distance: None,
            remaining: 0,
            failed: false,
        }
    }
}
