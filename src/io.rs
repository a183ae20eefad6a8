//! File-level helpers shared by the two command-line tools.
//!
//! Both tools read the whole input file, run it through the default codec
//! pair, and write the whole output file.  Progress goes to stderr through a
//! crate-global notification level so library users stay silent by default
//! and the tools can still report per-file ratios.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Context;

use crate::config::default_coder;

// ── Notification level ────────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = per-file results; 3+ = verbose.

static NOTIFICATION_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current notification level.
#[inline]
pub fn notification_level() -> u32 {
    NOTIFICATION_LEVEL.load(Ordering::Relaxed)
}

/// Sets the notification level.
#[inline]
pub fn set_notification_level(level: u32) {
    NOTIFICATION_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr when the notification level is at least `$level`.
#[macro_export]
macro_rules! notifylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::io::notification_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

// ── File operations ───────────────────────────────────────────────────────────

/// Compress `input` into `output` with the default codec pair.
pub fn compress_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let coder = default_coder();
    let encoded = coder
        .compress_to_vec(&data)
        .context("encoding token stream")?;
    fs::write(output, &encoded).with_context(|| format!("writing {}", output.display()))?;
    notifylevel!(
        2,
        "{}: {} bytes -> {} bytes ({:.1}%)\n",
        input.display(),
        data.len(),
        encoded.len(),
        ratio(encoded.len(), data.len())
    );
    Ok(())
}

/// Decompress `input` into `output` with the default codec pair.
pub fn decompress_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let coder = default_coder();
    let decoded = coder
        .decompress_to_vec(&data)
        .with_context(|| format!("decoding {}", input.display()))?;
    fs::write(output, &decoded).with_context(|| format!("writing {}", output.display()))?;
    notifylevel!(
        2,
        "{}: {} bytes -> {} bytes\n",
        input.display(),
        data.len(),
        decoded.len()
    );
    Ok(())
}

fn ratio(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        compressed as f64 / original as f64 * 100.0
    }
}
