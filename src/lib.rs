//! # acmatch
//!
//! Multi-pattern exact string matching with the
//! [Aho-Corasick algorithm](https://dl.acm.org/doi/10.1145/360825.360855).
//!
//! An [`AhoCorasick`] automaton is built once from a list of patterns and then scans any
//! number of texts in a single left-to-right pass, reporting every occurrence of every
//! pattern, overlapping ones included. The running time of a scan is linear in the length of
//! the text plus the number of matches, independent of the number of patterns.
//!
//! ## Examples
//!
//! ```
//! use acmatch::AhoCorasick;
//!
//! let patterns = vec!["he", "she", "his", "hers"];
//! let pma = AhoCorasick::new(patterns).unwrap();
//!
//! let mut it = pma.find_overlapping_iter("ushers");
//!
//! let m = it.next().unwrap();
//! assert_eq!((1, 3, "she"), (m.start(), m.end(), m.pattern()));
//!
//! let m = it.next().unwrap();
//! assert_eq!((2, 3, "he"), (m.start(), m.end(), m.pattern()));
//!
//! let m = it.next().unwrap();
//! assert_eq!((2, 5, "hers"), (m.start(), m.end(), m.pattern()));
//!
//! assert_eq!(None, it.next());
//! ```
//!
//! ## Positions
//!
//! The unit of comparison is a Unicode scalar value ([`char`]). [`Match::start()`] and
//! [`Match::end()`] are zero-based character indices and **both are inclusive**, so a match of
//! `"abc"` against the text `"abc"` spans `0..=2`. [`Match::byte_range()`] gives the same
//! span as a half-open byte range that can be used to slice the text.
//!
//! ## Storage
//!
//! Two transition stores are available and selected with [`AhoCorasickBuilder::storage()`]:
//! a sparse store keeping an ordered edge map per state, and a dense store keeping one
//! contiguous table indexed by state and compacted character code. Both produce identical
//! matches.

#![deny(missing_docs)]

mod automaton;
mod builder;
pub mod dot;
pub mod errors;
mod iter;
mod mapper;
mod output;
mod table;

#[cfg(test)]
mod tests;

use core::ops::Range;

pub use automaton::AhoCorasick;
pub use builder::AhoCorasickBuilder;
pub use iter::FindOverlappingIterator;

// The root state id.
pub(crate) const ROOT_STATE_ID: u32 = 0;

/// Match result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match<'a> {
    start: usize,
    end: usize,
    byte_end: usize,
    id: usize,
    pattern: &'a str,
}

impl<'a> Match<'a> {
    /// Character index of the first character of the match.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Character index of the last character of the match (inclusive).
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Half-open byte range of the match in the text.
    #[inline(always)]
    pub const fn byte_range(&self) -> Range<usize> {
        self.byte_end - self.pattern.len()..self.byte_end
    }

    /// Index of the matched pattern in the input list.
    #[inline(always)]
    pub const fn pattern_id(&self) -> usize {
        self.id
    }

    /// The matched pattern.
    #[inline(always)]
    pub const fn pattern(&self) -> &'a str {
        self.pattern
    }
}

/// Transition store used by an automaton.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Storage {
    /// Chooses [`Storage::Dense`] when the dense table fits within
    /// [`AhoCorasickBuilder::dense_cell_limit()`], and [`Storage::Sparse`] otherwise.
    #[default]
    Auto,

    /// An ordered edge map per state. Memory is proportional to the number of states.
    Sparse,

    /// A contiguous table of `num_states * (alphabet_size + 1)` cells, indexed by a compacted
    /// character code. Lookups are a single array access.
    Dense,
}
