use core::mem;

use crate::builder::AhoCorasickBuilder;
use crate::errors::Result;
use crate::iter::FindOverlappingIterator;
use crate::output::OutputSets;
use crate::table::{self, GotoTable, Table};
use crate::{Match, Storage, ROOT_STATE_ID};

/// Multiple pattern match automaton implemented with the Aho-Corasick algorithm.
///
/// The automaton consists of a goto function over a trie of the patterns, a failure function
/// and an output set per state. It is immutable once built, so a single instance can serve
/// any number of searches, from any number of threads.
///
/// # Build instructions
///
/// - [`AhoCorasick::new`] builds an automaton with the default settings.
/// - [`AhoCorasickBuilder`] selects the transition store.
#[derive(Clone, Debug)]
pub struct AhoCorasick {
    pub(crate) table: Table,
    pub(crate) storage: Storage,
    pub(crate) fail: Vec<u32>,
    pub(crate) outputs: OutputSets,
    pub(crate) patterns: Vec<String>,
    pub(crate) char_lens: Vec<usize>,
}

impl AhoCorasick {
    /// Creates a new [`AhoCorasick`] from input patterns. The pattern id `i` is associated with
    /// `patterns[i]`.
    ///
    /// # Arguments
    ///
    /// * `patterns` - List of patterns.
    ///
    /// # Errors
    ///
    /// [`AcmatchError`](crate::errors::AcmatchError) is returned when
    ///   - `patterns` contains entries of length zero,
    ///   - the number of patterns exceeds [`u32::MAX`], or
    ///   - the scale of the resulting automaton exceeds the expected one.
    ///
    /// # Examples
    ///
    /// ```
    /// use acmatch::AhoCorasick;
    ///
    /// let pma = AhoCorasick::new(["abc"]).unwrap();
    ///
    /// let matches = pma.find_overlapping("abc");
    /// assert_eq!(1, matches.len());
    /// assert_eq!((0, 2, "abc"), (matches[0].start(), matches[0].end(), matches[0].pattern()));
    /// ```
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        AhoCorasickBuilder::new().build(patterns)
    }

    /// Returns an iterator of overlapping matches in the given haystack.
    ///
    /// Matches are reported in order of their end positions. Matches ending at the same
    /// position are reported from the longest to the shortest, with duplicate patterns in
    /// input order.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    ///
    /// # Examples
    ///
    /// ```
    /// use acmatch::AhoCorasick;
    ///
    /// let patterns = vec!["a", "ab", "b"];
    /// let pma = AhoCorasick::new(patterns).unwrap();
    ///
    /// let mut it = pma.find_overlapping_iter("ab");
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 0, "a"), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 1, "ab"), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((1, 1, "b"), (m.start(), m.end(), m.pattern()));
    ///
    /// assert_eq!(None, it.next());
    /// ```
    pub fn find_overlapping_iter<'a, 'h>(
        &'a self,
        haystack: &'h str,
    ) -> FindOverlappingIterator<'a, 'h> {
        FindOverlappingIterator {
            pma: self,
            haystack: haystack.char_indices(),
            state_id: ROOT_STATE_ID,
            pos: 0,
            end: 0,
            byte_end: 0,
            output: [].iter(),
        }
    }

    /// Collects all overlapping matches in the given haystack.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    pub fn find_overlapping<'a>(&'a self, haystack: &str) -> Vec<Match<'a>> {
        self.find_overlapping_iter(haystack).collect()
    }

    /// Scans the haystack and calls `f(start, end, pattern)` for every overlapping match, in
    /// the same order as [`AhoCorasick::find_overlapping_iter()`]. Positions are character
    /// indices and `end` is inclusive.
    ///
    /// # Arguments
    ///
    /// * `haystack` - String to search for.
    /// * `f` - Callback receiving each match.
    ///
    /// # Examples
    ///
    /// ```
    /// use acmatch::AhoCorasick;
    ///
    /// let pma = AhoCorasick::new(["he", "she", "his", "hers"]).unwrap();
    ///
    /// let mut found = vec![];
    /// pma.for_each_match("ushers", |start, end, pattern| {
    ///     found.push((pattern.to_string(), start, end));
    /// });
    ///
    /// assert_eq!(
    ///     vec![
    ///         ("she".to_string(), 1, 3),
    ///         ("he".to_string(), 2, 3),
    ///         ("hers".to_string(), 2, 5),
    ///     ],
    ///     found,
    /// );
    /// ```
    pub fn for_each_match<'a, F>(&'a self, haystack: &str, mut f: F)
    where
        F: FnMut(usize, usize, &'a str),
    {
        match &self.table {
            Table::Sparse(t) => self.scan(t, haystack, &mut f),
            Table::Dense(t) => self.scan(t, haystack, &mut f),
        }
    }

    // Monomorphized per store.
    #[inline(always)]
    fn scan<'a, G, F>(&'a self, table: &G, haystack: &str, f: &mut F)
    where
        G: GotoTable,
        F: FnMut(usize, usize, &'a str),
    {
        let mut state_id = ROOT_STATE_ID;
        for (pos, c) in haystack.chars().enumerate() {
            state_id = table::next_state_id(table, &self.fail, state_id, c);
            for &id in self.outputs.get(state_id) {
                let id = id as usize;
                f(pos + 1 - self.char_lens[id], pos, &self.patterns[id]);
            }
        }
    }

    #[inline(always)]
    pub(crate) fn next_state_id(&self, state_id: u32, c: char) -> u32 {
        self.table.next_state_id(&self.fail, state_id, c)
    }

    #[inline(always)]
    pub(crate) fn make_match(&self, id: u32, end: usize, byte_end: usize) -> Match<'_> {
        let id = id as usize;
        Match {
            start: end + 1 - self.char_lens[id],
            end,
            byte_end,
            id,
            pattern: &self.patterns[id],
        }
    }

    /// Returns the transition store in use. Never [`Storage::Auto`].
    pub const fn storage(&self) -> Storage {
        self.storage
    }

    /// Returns the total number of states, including the root.
    pub fn num_states(&self) -> usize {
        self.fail.len()
    }

    /// Returns the number of patterns, duplicates included.
    pub fn num_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the pattern of the given id.
    pub fn pattern(&self, pattern_id: usize) -> Option<&str> {
        self.patterns.get(pattern_id).map(String::as_str)
    }

    /// Returns the explicit transitions of a state as `(character, child)` pairs, in character
    /// order. Transitions from the root back to itself are not listed.
    ///
    /// # Panics
    ///
    /// Panics if `state_id` is not smaller than [`AhoCorasick::num_states()`].
    pub fn edges(&self, state_id: u32) -> Vec<(char, u32)> {
        self.table.edges(state_id)
    }

    /// Returns the failure link of a state. The root fails to itself.
    ///
    /// # Panics
    ///
    /// Panics if `state_id` is not smaller than [`AhoCorasick::num_states()`].
    pub fn fail(&self, state_id: u32) -> u32 {
        self.fail[state_id as usize]
    }

    /// Returns the ids of the patterns recognized on reaching a state, in report order.
    ///
    /// # Panics
    ///
    /// Panics if `state_id` is not smaller than [`AhoCorasick::num_states()`].
    pub fn outputs(&self, state_id: u32) -> &[u32] {
        self.outputs.get(state_id)
    }

    /// Checks if reaching a state reports any pattern.
    ///
    /// # Panics
    ///
    /// Panics if `state_id` is not smaller than [`AhoCorasick::num_states()`].
    pub fn has_output(&self, state_id: u32) -> bool {
        !self.outputs.get(state_id).is_empty()
    }

    /// Returns the total amount of heap used by this automaton in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.table.heap_bytes()
            + self.fail.len() * mem::size_of::<u32>()
            + self.outputs.heap_bytes()
            + self.patterns.iter().map(String::len).sum::<usize>()
            + self.char_lens.len() * mem::size_of::<usize>()
    }
}
