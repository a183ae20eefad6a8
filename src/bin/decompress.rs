//! `lzs-decompress` — reconstruct a file from the packed wire format.
//!
//! Reads the input file whole, decodes it with the default codec pair
//! (split `(7, 11)` offsets, length codebook 1), and writes the
//! reconstructed bytes.  Exits non-zero on I/O failure or a malformed
//! stream.

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lzs-decompress", version, about = "Decompress a file with the default LZS codec pair")]
struct Args {
    /// Packed stream to decompress.
    input: PathBuf,
    /// Destination for the reconstructed bytes.
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = lzs::io::decompress_file(&args.input, &args.output) {
        eprintln!("lzs-decompress: {err:#}");
        process::exit(1);
    }
}
