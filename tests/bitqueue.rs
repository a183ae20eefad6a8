//! Component tests for the bit-level FIFO.

use lzs::{BitFieldQueue, BitQueueError};

// ─────────────────────────────────────────────────────────────────────────────
// Construction contracts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn new_rejects_width_over_cap() {
    assert_eq!(
        BitFieldQueue::new(0, 33).unwrap_err(),
        BitQueueError::WidthOverflow
    );
}

#[test]
fn new_rejects_value_wider_than_declared() {
    assert_eq!(
        BitFieldQueue::new(0b100, 2).unwrap_err(),
        BitQueueError::ValueTooWide
    );
    // The boundary value itself is fine.
    assert!(BitFieldQueue::new(0b11, 2).is_ok());
}

#[test]
fn new_accepts_full_width_value() {
    let bits = BitFieldQueue::new(u32::MAX, 32).unwrap();
    assert_eq!(bits.width(), 32);
    assert_eq!(bits.get(32).unwrap(), u32::MAX);
}

// ─────────────────────────────────────────────────────────────────────────────
// FIFO ordering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn appended_bits_leave_in_order() {
    let mut bits = BitFieldQueue::empty();
    bits.append(BitFieldQueue::new(0b101, 3).unwrap()).unwrap();
    bits.append(BitFieldQueue::new(0b01, 2).unwrap()).unwrap();
    assert_eq!(bits.width(), 5);
    assert_eq!(bits.get(5).unwrap(), 0b10101);
    assert_eq!(bits.pop(1).unwrap(), 1);
    assert_eq!(bits.pop(4).unwrap(), 0b0101);
    assert!(bits.is_empty());
}

#[test]
fn byte_stream_round_trips_through_queue() {
    // Pour bytes in, draw bytes out: the cumulative bit sequence observed by
    // pop must equal the sequence delivered to append, in order.
    let data = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01, 0x80, 0x7F, 0x00];
    let mut bits = BitFieldQueue::empty();
    let mut out = Vec::new();
    for chunk in data.chunks(3) {
        for &byte in chunk {
            bits.append(BitFieldQueue::new(byte as u32, 8).unwrap())
                .unwrap();
        }
        while bits.width() >= 8 {
            out.push(bits.pop(8).unwrap() as u8);
        }
    }
    assert_eq!(out, data);
}

#[test]
fn mixed_widths_preserve_bit_order() {
    // 1 + 3 + 7 + 5 = 16 bits pushed as odd-sized fields, drawn as two bytes.
    let mut bits = BitFieldQueue::empty();
    bits.append(BitFieldQueue::new(0b1, 1).unwrap()).unwrap();
    bits.append(BitFieldQueue::new(0b010, 3).unwrap()).unwrap();
    bits.append(BitFieldQueue::new(0b1100110, 7).unwrap())
        .unwrap();
    bits.append(BitFieldQueue::new(0b10011, 5).unwrap()).unwrap();
    assert_eq!(bits.pop(8).unwrap(), 0b1010_1100);
    assert_eq!(bits.pop(8).unwrap(), 0b1101_0011);
}

// ─────────────────────────────────────────────────────────────────────────────
// get / pop semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_does_not_consume() {
    let bits = BitFieldQueue::new(0b1011, 4).unwrap();
    assert_eq!(bits.get(2).unwrap(), 0b10);
    assert_eq!(bits.get(2).unwrap(), 0b10);
    assert_eq!(bits.width(), 4);
}

#[test]
fn pop_clears_consumed_high_bits() {
    let mut bits = BitFieldQueue::new(0b1111, 4).unwrap();
    assert_eq!(bits.pop(2).unwrap(), 0b11);
    // The remaining value must hold only the surviving low bits.
    assert_eq!(bits.width(), 2);
    assert_eq!(bits.get(2).unwrap(), 0b11);
    assert_eq!(bits.pop(2).unwrap(), 0b11);
    assert_eq!(bits.pop(0).unwrap(), 0);
}

#[test]
fn underflow_on_get_and_pop() {
    let mut bits = BitFieldQueue::new(0b1, 1).unwrap();
    assert_eq!(bits.get(2).unwrap_err(), BitQueueError::Underflow);
    assert_eq!(bits.pop(2).unwrap_err(), BitQueueError::Underflow);
    // The failed pop must not have disturbed the queue.
    assert_eq!(bits.pop(1).unwrap(), 1);
}

#[test]
fn append_past_capacity_fails_and_leaves_queue_intact() {
    let mut bits = BitFieldQueue::empty();
    for _ in 0..4 {
        bits.append(BitFieldQueue::new(0xA5, 8).unwrap()).unwrap();
    }
    assert_eq!(bits.width(), 32);
    assert_eq!(
        bits.append(BitFieldQueue::new(0, 1).unwrap()).unwrap_err(),
        BitQueueError::WidthOverflow
    );
    assert_eq!(bits.width(), 32);
    assert_eq!(bits.pop(8).unwrap(), 0xA5);
}

#[test]
fn append_empty_is_identity() {
    let mut bits = BitFieldQueue::new(0b10, 2).unwrap();
    bits.append(BitFieldQueue::empty()).unwrap();
    assert_eq!(bits.width(), 2);
    assert_eq!(bits.get(2).unwrap(), 0b10);
}
