//! Component tests for the circular history buffer.

use lzs::{HistoryBuffer, HistoryError};

// ─────────────────────────────────────────────────────────────────────────────
// Append, wrap and overwrite
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn append_and_index_before_wrapping() {
    let mut ring = HistoryBuffer::new(10);
    ring.append(b"abcdefg").unwrap();
    assert_eq!(ring.len(), 7);
    assert_eq!(ring.get(0).unwrap(), b'a');
    assert_eq!(ring.get(6).unwrap(), b'g');
    assert_eq!(ring.get(-1).unwrap(), b'g');
    assert_eq!(ring.get(-7).unwrap(), b'a');
}

#[test]
fn overflowing_append_keeps_the_newest_bytes() {
    let mut ring = HistoryBuffer::new(10);
    ring.append(b"abcdefg").unwrap();
    ring.append(b"hijklmnop").unwrap();
    // 16 bytes appended into a 10-byte ring: the oldest six are gone.
    assert_eq!(ring.len(), 10);
    assert_eq!(ring.get(0).unwrap(), b'g');
    assert_eq!(ring.get(1).unwrap(), b'h');
    assert_eq!(ring.get(9).unwrap(), b'p');
    assert_eq!(ring.get(-1).unwrap(), b'p');
    assert_eq!(ring.get(-2).unwrap(), b'o');
}

#[test]
fn oversize_append_is_rejected() {
    let mut ring = HistoryBuffer::new(4);
    assert_eq!(ring.append(b"abcde").unwrap_err(), HistoryError::Oversize);
    assert!(ring.is_empty());
    // An append of exactly the capacity is allowed.
    ring.append(b"abcd").unwrap();
    assert_eq!(ring.len(), 4);
}

#[test]
fn contents_always_equal_the_most_recent_appends() {
    // After any append sequence, index i must hold the
    // (total_appended - len + i)-th appended byte.
    let mut ring = HistoryBuffer::new(16);
    let mut appended = Vec::new();
    for run in 0..40usize {
        let chunk: Vec<u8> = (0..(run % 7 + 1)).map(|i| (run * 7 + i) as u8).collect();
        ring.append(&chunk).unwrap();
        appended.extend_from_slice(&chunk);
        let live = ring.len();
        assert_eq!(live, appended.len().min(16));
        for i in 0..live {
            let expected = appended[appended.len() - live + i];
            assert_eq!(ring.get(i as isize).unwrap(), expected);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Index and slice bounds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_indices_fail() {
    let mut ring = HistoryBuffer::new(8);
    ring.append(b"xyz").unwrap();
    assert_eq!(ring.get(3).unwrap_err(), HistoryError::OutOfRange);
    assert_eq!(ring.get(-4).unwrap_err(), HistoryError::OutOfRange);
    assert_eq!(ring.get(-3).unwrap(), b'x');
}

#[test]
fn slice_joins_the_two_pieces_across_the_wrap() {
    let mut ring = HistoryBuffer::new(10);
    ring.append(b"abcdefg").unwrap();
    ring.append(b"hijklmnop").unwrap();
    assert_eq!(ring.slice(0, 10).unwrap(), b"ghijklmnop");
    assert_eq!(ring.slice(2, 6).unwrap(), b"ijkl");
    assert_eq!(ring.slice(4, 4).unwrap(), b"");
    assert_eq!(ring.tail(3).unwrap(), b"nop");
}

#[test]
fn inverted_or_oversized_slices_fail() {
    let mut ring = HistoryBuffer::new(10);
    ring.append(b"abcdef").unwrap();
    assert_eq!(ring.slice(4, 2).unwrap_err(), HistoryError::OutOfRange);
    assert_eq!(ring.slice(0, 7).unwrap_err(), HistoryError::OutOfRange);
    assert_eq!(ring.tail(7).unwrap_err(), HistoryError::OutOfRange);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn pop_removes_the_oldest_bytes() {
    let mut ring = HistoryBuffer::new(10);
    ring.append(b"abcdefg").unwrap();
    ring.append(b"hijklmnop").unwrap();
    assert_eq!(ring.pop(4), b"ghij");
    assert_eq!(ring.len(), 6);
    assert_eq!(ring.get(0).unwrap(), b'k');
    // A pop past the live length is clamped.
    assert_eq!(ring.pop(100), b"klmnop");
    assert!(ring.is_empty());
    assert_eq!(ring.pop(1), b"");
}

// ─────────────────────────────────────────────────────────────────────────────
// Read-at-the-moment-of-the-read semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn interleaved_reads_see_bytes_just_written() {
    // The reconstructor replays a distance-1 match by reading the newest
    // byte and appending it, five times over; every read must see the byte
    // appended the step before.
    let mut ring = HistoryBuffer::new(8);
    ring.push(b'x');
    for _ in 0..5 {
        let byte = ring.get(-1).unwrap();
        assert_eq!(byte, b'x');
        ring.push(byte);
    }
    assert_eq!(ring.len(), 6);
    assert_eq!(ring.tail(6).unwrap(), b"xxxxxx");
}

#[test]
fn interleaved_reads_follow_a_sliding_source() {
    // Distance-2 copy over a two-byte seed alternates the pattern.
    let mut ring = HistoryBuffer::new(8);
    ring.append(b"ab").unwrap();
    let mut produced = Vec::new();
    for _ in 0..6 {
        let byte = ring.get(-2).unwrap();
        ring.push(byte);
        produced.push(byte);
    }
    assert_eq!(produced, b"ababab");
}
