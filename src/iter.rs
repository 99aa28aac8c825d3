//! Iterators for [`AhoCorasick`].

use core::slice;
use core::str::CharIndices;

use crate::{AhoCorasick, Match};

/// Iterator created by [`AhoCorasick::find_overlapping_iter()`].
pub struct FindOverlappingIterator<'a, 'h> {
    pub(crate) pma: &'a AhoCorasick,
    pub(crate) haystack: CharIndices<'h>,
    pub(crate) state_id: u32,
    // Character index of the next character to read.
    pub(crate) pos: usize,
    // Position of the pending outputs.
    pub(crate) end: usize,
    pub(crate) byte_end: usize,
    pub(crate) output: slice::Iter<'a, u32>,
}

impl<'a, 'h> Iterator for FindOverlappingIterator<'a, 'h> {
    type Item = Match<'a>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&id) = self.output.next() {
            return Some(self.pma.make_match(id, self.end, self.byte_end));
        }
        for (byte_pos, c) in self.haystack.by_ref() {
            let pos = self.pos;
            self.pos += 1;
            self.state_id = self.pma.next_state_id(self.state_id, c);
            if let Some((&id, rest)) = self.pma.outputs.get(self.state_id).split_first() {
                self.end = pos;
                self.byte_end = byte_pos + c.len_utf8();
                self.output = rest.iter();
                return Some(self.pma.make_match(id, self.end, self.byte_end));
            }
        }
        None
    }
}
