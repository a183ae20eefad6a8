//! Sliding-window LZS-style lossless compression.
//!
//! An LZ77-family byte-stream compressor and decompressor aimed at
//! embedded-class environments: a small deterministic memory footprint, a
//! byte-oriented bit-packed wire format, and no state beyond a bounded
//! sliding window.  The engine is parameterized by two pluggable codebooks —
//! an *offset codec* for back-reference distances and a *length codec* for
//! match lengths — injected into a [`Coder`] pair.
//!
//! ```
//! use lzs::{Coder, Codebook, LengthCode, SplitOffsetCode};
//!
//! let coder = Coder::new(SplitOffsetCode::new(7, 11), LengthCode::codebook(Codebook::C1));
//! let input = b"That Sam-I-am, that Sam-I-am, I do not like that Sam-I-am.";
//! let packed = coder.compress_to_vec(input).unwrap();
//! assert!(packed.len() < input.len());
//! assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
//! ```
//!
//! The wire format carries no magic bytes, length prefix, or checksum; the
//! decoding side must be constructed with the same codec pair as the
//! encoder.

pub mod bitqueue;
pub mod codec;
pub mod config;
pub mod engine;
pub mod history;
pub mod io;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level re-exports of the common entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// The codec-pair engine: compress / encode / decode / decompress.
pub use engine::Coder;
/// The intermediate token stream.
pub use engine::Token;

/// Tagged short/long offset codec (base and dense variants).
pub use codec::offset::SplitOffsetCode;
/// Fixed-width offset codec.
pub use codec::offset::FlatOffsetCode;
/// Capability trait implemented by every offset codec.
pub use codec::offset::OffsetCode;
/// Decoded offset field: a distance or the end-of-stream marker.
pub use codec::offset::Offset;

/// Static length codebook.
pub use codec::length::LengthCode;
/// Selector for the eight shipped length codebooks.
pub use codec::length::Codebook;

/// Bit-level FIFO used by the emitters and parsers.
pub use bitqueue::BitFieldQueue;
/// Circular ring over the most recent output bytes.
pub use history::HistoryBuffer;

/// Error types.
pub use bitqueue::BitQueueError;
pub use codec::CodeError;
pub use engine::{DecodeError, EncodeError};
pub use history::HistoryError;

/// The codec pair shipped as the default (split `(7, 11)` + codebook 1).
pub use config::default_coder;
