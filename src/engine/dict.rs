//! Match dictionary for the greedy sliding-window search.
//!
//! Maps every fragment of length `min_len..=max_len` starting inside the
//! window to the ordered list of source offsets where it begins.  Offsets
//! are appended as the cursor advances and evicted oldest-first once they
//! fall more than `max_offset` bytes behind, so any offset the search
//! returns is guaranteed to be within the expressible window.

use std::collections::{HashMap, VecDeque};

pub(crate) struct MatchDict<'a> {
    input: &'a [u8],
    min_len: usize,
    max_len: usize,
    max_offset: usize,
    map: HashMap<&'a [u8], VecDeque<usize>>,
}

impl<'a> MatchDict<'a> {
    pub(crate) fn new(input: &'a [u8], min_len: usize, max_len: usize, max_offset: usize) -> Self {
        Self {
            input,
            min_len,
            max_len,
            max_offset,
            map: HashMap::new(),
        }
    }

    /// Register `offset` under every fragment length that fits, and slide
    /// the window: once the cursor is `max_offset` past a position, that
    /// position is removed from every list it heads.
    pub(crate) fn register(&mut self, offset: usize) {
        for len in self.min_len..=self.max_len {
            if offset + len > self.input.len() {
                break;
            }
            self.map
                .entry(&self.input[offset..offset + len])
                .or_default()
                .push_back(offset);
        }
        if offset >= self.max_offset {
            let stale = offset - self.max_offset;
            for len in self.min_len..=self.max_len {
                if stale + len > self.input.len() {
                    break;
                }
                let fragment: &[u8] = &self.input[stale..stale + len];
                if let Some(offsets) = self.map.get_mut(fragment) {
                    offsets.pop_front();
                    if offsets.is_empty() {
                        self.map.remove(fragment);
                    }
                }
            }
        }
    }

    /// Longest-fragment-first lookup at `pos`.
    ///
    /// Returns the source offset and fragment length of the best candidate:
    /// the longest registered fragment matching the input at `pos`, and
    /// among same-length candidates the most recently registered offset.
    pub(crate) fn find(&self, pos: usize) -> Option<(usize, usize)> {
        for len in (self.min_len..=self.max_len).rev() {
            if pos + len > self.input.len() {
                continue;
            }
            if let Some(offsets) = self.map.get(&self.input[pos..pos + len]) {
                if let Some(&source) = offsets.back() {
                    return Some((source, len));
                }
            }
        }
        None
    }
}
