//! The compression/decompression engine.
//!
//! [`Coder`] binds an offset codec and a length codebook into one codec
//! pair and carries the full pipeline:
//!
//! - [`compress`](Coder::compress): raw bytes → token stream (greedy match
//!   finder)
//! - [`encode`](Coder::encode): token stream → packed bitstream
//! - [`decode`](Coder::decode) / [`gen_decode`](Coder::gen_decode): packed
//!   bitstream → token stream
//! - [`decompress`](Coder::decompress) /
//!   [`gen_decompress`](Coder::gen_decompress): token stream → raw bytes
//!
//! The wire format is not self-describing: the decoding side must construct
//! its `Coder` with the same codec pair the encoder used.

pub mod compress;
pub mod decompress;
mod dict;
pub mod token;

pub use compress::EncodeError;
pub use decompress::{Bytes, DecodeError, Tokens};
pub use token::Token;

use crate::codec::{LengthCode, OffsetCode};

/// Fragment lengths registered in the match dictionary are capped here; a
/// longer expressible initial match is still found by byte-wise extension.
pub const MAX_DICT_SEARCH_LEN: u16 = 15;

/// A codec pair bound into a compressor/decompressor.
///
/// Immutable after construction; a single `Coder` may be reused across any
/// number of independent compress or decompress calls.
pub struct Coder<O: OffsetCode> {
    offsets: O,
    lengths: LengthCode,
    max_dict_search_len: u16,
}

impl<O: OffsetCode> Coder<O> {
    /// Bind an offset codec and a length codebook.
    pub fn new(offsets: O, lengths: LengthCode) -> Self {
        let max_dict_search_len = MAX_DICT_SEARCH_LEN.min(lengths.max_initial_len());
        Self {
            offsets,
            lengths,
            max_dict_search_len,
        }
    }

    /// The offset codec in use.
    #[inline]
    pub fn offsets(&self) -> &O {
        &self.offsets
    }

    /// The length codebook in use.
    #[inline]
    pub fn lengths(&self) -> &LengthCode {
        &self.lengths
    }

    /// Sliding-window capacity implied by the offset codec.
    #[inline]
    pub fn history_capacity(&self) -> usize {
        self.offsets.max_offset() as usize + 1
    }

    /// Compress and pack in one step.
    pub fn compress_to_vec(&self, input: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let tokens = self.compress(input);
        self.encode(&tokens)
    }

    /// Unpack and reconstruct in one step.
    pub fn decompress_to_vec(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let tokens = self.decode(input)?;
        self.decompress(&tokens)
    }
}
