//! Construction of [`AhoCorasick`].

use crate::automaton::AhoCorasick;
use crate::errors::{AcmatchError, Result};
use crate::mapper::Alphabet;
use crate::output::OutputSets;
use crate::table::{DenseTable, GotoTable, SparseTable, Table};
use crate::{Storage, ROOT_STATE_ID};

// State ids must stay below this value.
const STATE_ID_LIMIT: u32 = u32::MAX;

// Default upper bound on the number of cells of an automatically selected dense table.
const DEFAULT_DENSE_CELL_LIMIT: usize = 1 << 22;

/// Builder of [`AhoCorasick`].
#[derive(Clone, Copy, Debug)]
pub struct AhoCorasickBuilder {
    storage: Storage,
    dense_cell_limit: usize,
}

impl Default for AhoCorasickBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AhoCorasickBuilder {
    /// Creates a new [`AhoCorasickBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use acmatch::AhoCorasickBuilder;
    ///
    /// let patterns = vec!["bcd", "ab", "a"];
    /// let pma = AhoCorasickBuilder::new().build(patterns).unwrap();
    ///
    /// let mut it = pma.find_overlapping_iter("abcd");
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 0, "a"), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 1, "ab"), (m.start(), m.end(), m.pattern()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((1, 3, "bcd"), (m.start(), m.end(), m.pattern()));
    ///
    /// assert_eq!(None, it.next());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Storage::Auto,
            dense_cell_limit: DEFAULT_DENSE_CELL_LIMIT,
        }
    }

    /// Specifies the transition store to build.
    ///
    /// # Arguments
    ///
    /// * `storage` - Transition store.
    #[must_use]
    pub const fn storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    /// Specifies the largest number of cells a dense table may have to be picked by
    /// [`Storage::Auto`]. The number of cells is bounded by the number of characters in the
    /// patterns plus one, multiplied by the number of distinct characters plus one.
    ///
    /// # Arguments
    ///
    /// * `n` - The number of cells. Must be at least 1.
    #[must_use]
    pub const fn dense_cell_limit(mut self, n: usize) -> Self {
        self.dense_cell_limit = n;
        self
    }

    /// Builds and returns a new [`AhoCorasick`] from input patterns.
    /// The pattern id `i` is associated with `patterns[i]`.
    ///
    /// Duplicate patterns are kept: every copy is reported separately at each occurrence.
    /// An empty list of patterns builds an automaton that never matches.
    ///
    /// # Arguments
    ///
    /// * `patterns` - List of patterns.
    ///
    /// # Errors
    ///
    /// [`AcmatchError`] is returned when
    ///   - `patterns` contains entries of length zero,
    ///   - the dense cell limit is zero,
    ///   - the number of patterns exceeds [`u32::MAX`], or
    ///   - the scale of the resulting automaton exceeds the expected one.
    ///
    /// # Examples
    ///
    /// ```
    /// use acmatch::{AhoCorasickBuilder, Storage};
    ///
    /// let patterns = vec!["全世界", "世界", "に"];
    /// let pma = AhoCorasickBuilder::new()
    ///     .storage(Storage::Dense)
    ///     .build(patterns)
    ///     .unwrap();
    ///
    /// let mut it = pma.find_overlapping_iter("全世界中に");
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((0, 2, 0), (m.start(), m.end(), m.pattern_id()));
    /// assert_eq!(0..9, m.byte_range());
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((1, 2, 1), (m.start(), m.end(), m.pattern_id()));
    ///
    /// let m = it.next().unwrap();
    /// assert_eq!((4, 4, 2), (m.start(), m.end(), m.pattern_id()));
    ///
    /// assert_eq!(None, it.next());
    /// ```
    pub fn build<I, P>(self, patterns: I) -> Result<AhoCorasick>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        if self.dense_cell_limit == 0 {
            return Err(AcmatchError::invalid_argument(
                "dense_cell_limit",
                ">=",
                1,
            ));
        }

        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        if u32::try_from(patterns.len()).is_err() {
            return Err(AcmatchError::pattern_scale("patterns.len()", u32::MAX));
        }

        let mut char_lens = Vec::with_capacity(patterns.len());
        let mut max_states = 1usize;
        for (i, pattern) in patterns.iter().enumerate() {
            let len = pattern.chars().count();
            if len == 0 {
                return Err(AcmatchError::empty_pattern(i));
            }
            char_lens.push(len);
            max_states = max_states.saturating_add(len);
        }

        let (table, fail, outputs, storage) = if self.storage == Storage::Sparse {
            let (table, fail, outputs) = build_automaton(SparseTable::new(), &patterns)?;
            (Table::Sparse(table), fail, outputs, Storage::Sparse)
        } else {
            let alphabet = Alphabet::new(&patterns);
            if self.storage == Storage::Dense || self.fits_dense(max_states, &alphabet) {
                let (table, fail, outputs) =
                    build_automaton(DenseTable::new(alphabet), &patterns)?;
                (Table::Dense(table), fail, outputs, Storage::Dense)
            } else {
                let (table, fail, outputs) = build_automaton(SparseTable::new(), &patterns)?;
                (Table::Sparse(table), fail, outputs, Storage::Sparse)
            }
        };

        tracing::debug!(
            num_states = table.num_states(),
            num_patterns = patterns.len(),
            num_outputs = outputs.len(),
            ?storage,
            "built automaton"
        );

        Ok(AhoCorasick {
            table,
            storage,
            fail,
            outputs,
            patterns,
            char_lens,
        })
    }

    fn fits_dense(&self, max_states: usize, alphabet: &Alphabet) -> bool {
        let num_columns = alphabet.num_columns();
        let fits = max_states
            .checked_mul(num_columns)
            .is_some_and(|cells| cells <= self.dense_cell_limit);
        tracing::trace!(
            max_states,
            alphabet_size = alphabet.alphabet_size(),
            fits,
            "checked dense table size"
        );
        fits
    }
}

/// Builds the goto function, the failure function and the output sets on `table`.
fn build_automaton<G>(mut table: G, patterns: &[String]) -> Result<(G, Vec<u32>, OutputSets)>
where
    G: GotoTable,
{
    let own = add_patterns(&mut table, patterns)?;
    table.close_root();
    let (fail, mut outputs) = build_fails(&table, &own);
    table.shrink_to_fit();
    outputs.shrink_to_fit();
    Ok((table, fail, outputs))
}

/// Inserts the patterns into the trie, allocating state ids sequentially, and returns the ids
/// of the patterns ending at each state.
fn add_patterns<G>(table: &mut G, patterns: &[String]) -> Result<Vec<Vec<u32>>>
where
    G: GotoTable,
{
    let mut own = vec![vec![]];
    for (pattern_id, pattern) in patterns.iter().enumerate() {
        let mut state_id = ROOT_STATE_ID;
        for c in pattern.chars() {
            let sym = table.symbol(c);
            if let Some(next_state_id) = table.child(state_id, sym) {
                state_id = next_state_id;
                continue;
            }
            let next_state_id = u32::try_from(table.num_states())
                .ok()
                .filter(|&id| id < STATE_ID_LIMIT)
                .ok_or_else(|| AcmatchError::automaton_scale("num_states", STATE_ID_LIMIT))?;
            table.push_state();
            table.set_child(state_id, sym, next_state_id);
            own.push(vec![]);
            state_id = next_state_id;
        }
        // pattern_id fits in u32 since the number of patterns was checked.
        own[state_id as usize].push(pattern_id as u32);
    }
    Ok(own)
}

/// Computes failure links and output sets in breadth-first order.
fn build_fails<G>(table: &G, own: &[Vec<u32>]) -> (Vec<u32>, OutputSets)
where
    G: GotoTable,
{
    let num_states = table.num_states();
    let mut fail = vec![ROOT_STATE_ID; num_states];
    let mut outputs = OutputSets::new(num_states);

    // States of depth 1 fail to the root.
    let mut q = Vec::with_capacity(num_states);
    for (_, child_id) in table.edges(ROOT_STATE_ID) {
        outputs.append(child_id, &own[child_id as usize], ROOT_STATE_ID);
        q.push(child_id);
    }

    let mut qi = 0;
    while qi < q.len() {
        let state_id = q[qi];
        qi += 1;

        for (sym, child_id) in table.edges(state_id) {
            let mut fail_id = fail[state_id as usize];
            let child_fail_id = loop {
                if let Some(child_fail_id) = table.child(fail_id, sym) {
                    break child_fail_id;
                }
                fail_id = fail[fail_id as usize];
            };
            fail[child_id as usize] = child_fail_id;
            // The failure target is shallower, so its set is already complete.
            outputs.append(child_id, &own[child_id as usize], child_fail_id);
            q.push(child_id);
        }
    }
    (fail, outputs)
}
