//! Compaction of the pattern characters into dense column codes.

use core::mem;

const ASCII_LEN: usize = 0x80;

/// Mapping from the characters occurring in a pattern set to codes `0..k`.
///
/// Code `k` (the alphabet size) is shared by every character that never
/// appears in the patterns.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Alphabet {
    chars: Vec<char>,
    // Direct lookup for ASCII; larger characters go through binary search.
    ascii: [u32; ASCII_LEN],
}

impl Alphabet {
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut chars = vec![];
        for pattern in patterns {
            chars.extend(pattern.as_ref().chars());
        }
        chars.sort_unstable();
        chars.dedup();

        // Every entry starts as the catch-all code.
        let absent = chars.len() as u32;
        let mut ascii = [absent; ASCII_LEN];
        for (code, &c) in chars.iter().enumerate() {
            if let Some(slot) = ascii.get_mut(c as usize) {
                *slot = code as u32;
            }
        }
        Self { chars, ascii }
    }

    /// Returns the code of `c`, or [`Self::absent_code()`] if `c` is not in the alphabet.
    #[inline(always)]
    pub fn get(&self, c: char) -> u32 {
        if let Some(&code) = self.ascii.get(c as usize) {
            return code;
        }
        match self.chars.binary_search(&c) {
            Ok(code) => code as u32,
            Err(_) => self.absent_code(),
        }
    }

    /// Returns the character assigned to `code`, or `None` for the catch-all code.
    #[inline(always)]
    pub fn char_of(&self, code: u32) -> Option<char> {
        self.chars.get(code as usize).copied()
    }

    /// Code shared by all characters outside the alphabet.
    #[inline(always)]
    pub fn absent_code(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Number of distinct characters.
    #[inline(always)]
    pub fn alphabet_size(&self) -> usize {
        self.chars.len()
    }

    /// Number of table columns, i.e., the alphabet size plus the catch-all column.
    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.chars.len() + 1
    }

    pub fn heap_bytes(&self) -> usize {
        self.chars.len() * mem::size_of::<char>()
    }
}
