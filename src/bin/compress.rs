//! `lzs-compress` — compress one file into the packed wire format.
//!
//! Reads the input file whole, compresses it with the default codec pair
//! (split `(7, 11)` offsets, length codebook 1), and writes the packed
//! bytes.  Exits non-zero on any I/O failure.

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lzs-compress", version, about = "Compress a file with the default LZS codec pair")]
struct Args {
    /// File to compress.
    input: PathBuf,
    /// Destination for the packed stream.
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = lzs::io::compress_file(&args.input, &args.output) {
        eprintln!("lzs-compress: {err:#}");
        process::exit(1);
    }
}
