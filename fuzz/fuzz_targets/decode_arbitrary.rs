#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the decoder.  Err results are expected
    // and fine; what we verify is the absence of panics.
    let coder = lzs::default_coder();
    let _ = coder.decompress_to_vec(data);

    // The lazy pipeline must agree with the one-shot path on success.
    let streamed: Result<Vec<u8>, _> = coder.gen_decompress(coder.gen_decode(data)).collect();
    if let (Ok(oneshot), Ok(streamed)) = (coder.decompress_to_vec(data), streamed) {
        assert_eq!(oneshot, streamed);
    }
});
