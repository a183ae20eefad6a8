#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any input must survive compress → encode → decode → decompress intact.
    let coder = lzs::default_coder();
    let packed = coder.compress_to_vec(data).expect("encoding own tokens");
    let recovered = coder
        .decompress_to_vec(&packed)
        .expect("decoding own stream");
    assert_eq!(recovered, data, "round-trip mismatch");
});
