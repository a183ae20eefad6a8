//! The token stream exchanged between the match finder and the reconstructor.

/// One unit of the intermediate token stream.
///
/// Tokens are produced in order by [`compress`] and consumed in order by
/// [`decompress`]; they are never re-ordered.
///
/// [`compress`]: crate::engine::Coder::compress
/// [`decompress`]: crate::engine::Coder::decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// One uncoded source byte.
    Literal(u8),
    /// A back-reference into the sliding window.  `distance` counts back
    /// from the current output position (so `distance == 1` is the byte just
    /// produced); `length` is within the active codebook's initial range.
    Match { distance: u32, length: u16 },
    /// Extension of the immediately preceding saturated match (or
    /// continuation) by `length` further bytes from the same sliding source.
    /// A length below the codebook's continuation maximum — including zero —
    /// terminates the run.
    Continuation(u16),
}
