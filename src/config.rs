// config.rs — compile-time defaults for the shipped codec pair.
//
// The wire format is not self-describing, so both command-line tools (and
// any pair of communicating peers) must agree on these out of band.  The
// shipped pair is the split (7, 11) offset codec with length codebook 1:
// a 2 KiB window with the classic LZS length coding.

use crate::codec::{Codebook, LengthCode, SplitOffsetCode};
use crate::engine::Coder;

// Short-field width of the default split offset codec.
pub const DEFAULT_SHORT_BITS: u32 = 7;

// Long-field width of the default split offset codec (window = 2^11 bytes).
pub const DEFAULT_LONG_BITS: u32 = 11;

// Length codebook used by default.
pub const DEFAULT_CODEBOOK: Codebook = Codebook::C1;

/// The codec pair both command-line tools are built with.
pub fn default_coder() -> Coder<SplitOffsetCode> {
    Coder::new(
        SplitOffsetCode::new(DEFAULT_SHORT_BITS, DEFAULT_LONG_BITS),
        LengthCode::codebook(DEFAULT_CODEBOOK),
    )
}
