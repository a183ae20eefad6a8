//! Round trips across the whole codec-pair matrix.
//!
//! The wire format changes with every pair, so each pair is exercised
//! against the same set of inputs: empty, tiny, repetitive (continuation
//! runs), textual, and binary-ish.

use lzs::{Codebook, Coder, FlatOffsetCode, LengthCode, OffsetCode, SplitOffsetCode};

fn sample_inputs() -> Vec<Vec<u8>> {
    let mut state: u32 = 0xC0FF_EE11;
    let mut noise = Vec::with_capacity(4096);
    for _ in 0..4096 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        noise.push((state >> 8) as u8);
    }
    vec![
        Vec::new(),
        b"a".to_vec(),
        b"ab".to_vec(),
        vec![b'x'; 300],
        b"That Sam-I-am, that Sam-I-am, I do not like that Sam-I-am.".to_vec(),
        b"the quick brown fox jumps over the lazy dog. ".repeat(40),
        noise,
    ]
}

fn assert_pair_roundtrips<O: OffsetCode>(coder: &Coder<O>, label: &str) {
    for input in sample_inputs() {
        let packed = coder
            .compress_to_vec(&input)
            .unwrap_or_else(|err| panic!("{label}: encode failed: {err}"));
        let out = coder
            .decompress_to_vec(&packed)
            .unwrap_or_else(|err| panic!("{label}: decode failed: {err}"));
        assert_eq!(out, input, "{label}: {} byte input", input.len());
    }
}

#[test]
fn split_offsets_with_every_codebook() {
    for which in Codebook::ALL {
        let coder = Coder::new(SplitOffsetCode::new(7, 11), LengthCode::codebook(which));
        assert_pair_roundtrips(&coder, &format!("split(7,11) + {which:?}"));
    }
}

#[test]
fn dense_split_offsets_with_every_codebook() {
    for which in Codebook::ALL {
        let coder = Coder::new(SplitOffsetCode::dense(7, 11), LengthCode::codebook(which));
        assert_pair_roundtrips(&coder, &format!("dense(7,11) + {which:?}"));
    }
}

#[test]
fn flat_offsets_with_every_codebook() {
    for which in Codebook::ALL {
        let coder = Coder::new(FlatOffsetCode::new(10), LengthCode::codebook(which));
        assert_pair_roundtrips(&coder, &format!("flat(10) + {which:?}"));
    }
}

#[test]
fn narrow_and_wide_windows() {
    // Small windows force heavy eviction; wide ones exercise long fields.
    let coder = Coder::new(SplitOffsetCode::new(3, 5), LengthCode::codebook(Codebook::C1));
    assert_pair_roundtrips(&coder, "split(3,5) + C1");

    let coder = Coder::new(SplitOffsetCode::new(8, 14), LengthCode::codebook(Codebook::C7));
    assert_pair_roundtrips(&coder, "split(8,14) + C7");

    let coder = Coder::new(FlatOffsetCode::new(16), LengthCode::codebook(Codebook::C4));
    assert_pair_roundtrips(&coder, "flat(16) + C4");
}

#[test]
fn no_continuation_codebook_never_extends_a_match() {
    let coder = Coder::new(SplitOffsetCode::new(7, 11), LengthCode::codebook(Codebook::C8));
    let input = vec![b'z'; 500];
    let tokens = coder.compress(&input);
    assert!(tokens
        .iter()
        .all(|t| !matches!(t, lzs::Token::Continuation(_))));
    let packed = coder.encode(&tokens).unwrap();
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
}
