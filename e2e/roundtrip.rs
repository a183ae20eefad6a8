//! End-to-end round trips through the default codec pair
//! (split `(7, 11)` offsets, length codebook 1).

use lzs::{default_coder, DecodeError, Token};

use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Concrete scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_just_the_end_marker() {
    let coder = default_coder();
    let tokens = coder.compress(b"");
    assert!(tokens.is_empty());
    let packed = coder.encode(&tokens).unwrap();
    // Tag 1, all-zero short offset field, zero padding to two bytes.
    assert_eq!(packed, [0xC0, 0x00]);
    assert!(coder.decode(&packed).unwrap().is_empty());
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), b"");
}

#[test]
fn single_byte_is_one_literal() {
    let coder = default_coder();
    let tokens = coder.compress(b"a");
    assert_eq!(tokens, [Token::Literal(0x61)]);
    let packed = coder.encode(&tokens).unwrap();
    let out = coder.decompress_to_vec(&packed).unwrap();
    assert_eq!(out, b"a");
}

#[test]
fn byte_run_becomes_a_self_overlapping_match() {
    let coder = default_coder();
    let tokens = coder.compress(b"aaaaaaaa");
    // The remaining seven bytes fit inside one initial match sourced one
    // byte back, so no continuation is needed.
    assert_eq!(
        tokens,
        [
            Token::Literal(b'a'),
            Token::Match {
                distance: 1,
                length: 7
            }
        ]
    );
    let packed = coder.encode(&tokens).unwrap();
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), b"aaaaaaaa");
}

#[test]
fn repeated_phrases_compress_and_round_trip() {
    let coder = default_coder();
    let input = b"That Sam-I-am, that Sam-I-am, I do not like that Sam-I-am.";
    let packed = coder.compress_to_vec(input).unwrap();
    assert!(packed.len() < input.len());
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
}

#[test]
fn long_run_saturates_into_continuations() {
    let coder = default_coder();
    let mut input = b"abcdefghij".to_vec();
    input.extend_from_slice(&[b'0'; 20]);
    let tokens = coder.compress(&input);
    // Twenty zeros cannot fit in one initial match (max 8), so a saturated
    // match must be extended by at least one continuation field.
    let saturated = tokens
        .iter()
        .position(|t| matches!(t, Token::Match { length: 8, .. }))
        .expect("a saturated match");
    assert!(matches!(tokens[saturated + 1], Token::Continuation(_)));
    let packed = coder.encode(&tokens).unwrap();
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
}

#[test]
fn run_ending_at_saturation_emits_an_empty_continuation() {
    let coder = default_coder();
    let input: Vec<u8> = b"12345678"
        .iter()
        .chain(b"12345678")
        .chain(b"Z")
        .copied()
        .collect();
    let tokens = coder.compress(&input);
    // The second block matches the first for exactly the initial maximum,
    // so the run terminates with a zero-length continuation on the wire.
    assert!(tokens.windows(2).any(|pair| matches!(
        pair,
        [
            Token::Match { length: 8, .. },
            Token::Continuation(0)
        ]
    )));
    let packed = coder.encode(&tokens).unwrap();
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
}

// ─────────────────────────────────────────────────────────────────────────────
// Window bound and determinism
// ─────────────────────────────────────────────────────────────────────────────

/// Deterministic mixed text/binary generator, biased toward repeats.
fn varied_bytes(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        if state % 3 == 0 {
            out.extend_from_slice(b"the quick brown fox ");
        } else {
            out.push((state % 64 + 32) as u8);
        }
    }
    out.truncate(len);
    out
}

#[test]
fn matches_never_reach_outside_the_window_or_past_the_cursor() {
    let coder = default_coder();
    let input = varied_bytes(6000);
    let tokens = coder.compress(&input);
    let mut cursor = 0usize;
    for token in &tokens {
        match *token {
            Token::Literal(_) => cursor += 1,
            Token::Match { distance, length } => {
                assert!(distance >= 1);
                assert!(distance <= 2047);
                // The source must start strictly before the cursor.
                assert!((distance as usize) <= cursor);
                cursor += length as usize;
            }
            Token::Continuation(length) => cursor += length as usize,
        }
    }
    assert_eq!(cursor, input.len());
    let packed = coder.encode(&tokens).unwrap();
    assert_eq!(coder.decompress_to_vec(&packed).unwrap(), input);
}

#[test]
fn encoding_is_reproducible() {
    let coder = default_coder();
    let input = varied_bytes(3000);
    let first = coder.compress_to_vec(&input).unwrap();
    let second = coder.compress_to_vec(&input).unwrap();
    assert_eq!(first, second);
}

// ─────────────────────────────────────────────────────────────────────────────
// Lazy decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn generator_pipeline_matches_the_one_shot_path() {
    let coder = default_coder();
    let input = varied_bytes(2500);
    let packed = coder.compress_to_vec(&input).unwrap();

    let streamed: Result<Vec<u8>, DecodeError> =
        coder.gen_decompress(coder.gen_decode(&packed)).collect();
    assert_eq!(streamed.unwrap(), input);
}

#[test]
fn generator_yields_a_stable_prefix() {
    let coder = default_coder();
    let input = varied_bytes(1200);
    let packed = coder.compress_to_vec(&input).unwrap();
    let prefix: Result<Vec<u8>, DecodeError> = coder
        .gen_decompress(coder.gen_decode(&packed))
        .take(100)
        .collect();
    assert_eq!(prefix.unwrap(), &input[..100]);
}

#[test]
fn gen_decompress_accepts_a_plain_token_list() {
    let coder = default_coder();
    let tokens = coder.compress(b"banana banana banana");
    let bytes: Result<Vec<u8>, DecodeError> = coder
        .gen_decompress(tokens.iter().copied().map(Ok))
        .collect();
    assert_eq!(bytes.unwrap(), b"banana banana banana");
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn truncated_continuation_run_is_malformed() {
    let coder = default_coder();
    // Decodes as a saturated match whose continuation fields run off the
    // end of the input.
    assert_eq!(
        coder.decode(&[0xFF, 0xFF]).unwrap_err(),
        DecodeError::MalformedStream
    );
}

#[test]
fn out_of_window_tokens_are_malformed() {
    let coder = default_coder();
    assert_eq!(
        coder.decompress(&[Token::Match {
            distance: 5,
            length: 3
        }]),
        Err(DecodeError::MalformedStream)
    );
    assert_eq!(
        coder.decompress(&[Token::Continuation(4)]),
        Err(DecodeError::MalformedStream)
    );
    let streamed: Result<Vec<u8>, DecodeError> = coder
        .gen_decompress([Ok(Token::Match {
            distance: 1,
            length: 2,
        })])
        .collect();
    assert_eq!(streamed, Err(DecodeError::MalformedStream));
}

#[test]
fn self_overlap_reconstruction_extends_runs() {
    let coder = default_coder();
    let tokens = [
        Token::Literal(b'b'),
        Token::Match {
            distance: 1,
            length: 5,
        },
    ];
    assert_eq!(coder.decompress(&tokens).unwrap(), b"bbbbbb");
}

#[test]
fn concatenated_streams_decode_back_to_back() {
    let coder = default_coder();
    let first = coder.compress_to_vec(b"first stream, first stream").unwrap();
    let second = coder.compress_to_vec(b"and a second").unwrap();
    let mut joined = first;
    joined.extend_from_slice(&second);
    assert_eq!(
        coder.decompress_to_vec(&joined).unwrap(),
        b"first stream, first streamand a second"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based round trips
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn roundtrip_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..2000)) {
        let coder = default_coder();
        let packed = coder.compress_to_vec(&data).unwrap();
        prop_assert_eq!(coder.decompress_to_vec(&packed).unwrap(), data);
    }

    #[test]
    fn roundtrip_match_heavy_bytes(data in proptest::collection::vec(0u8..4, 0..3000)) {
        // A four-symbol alphabet forces long matches and continuation runs.
        let coder = default_coder();
        let packed = coder.compress_to_vec(&data).unwrap();
        prop_assert_eq!(coder.decompress_to_vec(&packed).unwrap(), data);
    }
}
