use core::mem;

/// Output sets of all states, stored back to back in one append-only arena.
///
/// The set of a state is the pattern ids ending exactly at the state, in input order,
/// followed by the set of its failure target.
#[derive(Clone, Debug, Default)]
pub(crate) struct OutputSets {
    ids: Vec<u32>,
    // (start, len) in `ids` for each state.
    spans: Vec<(usize, usize)>,
}

impl OutputSets {
    pub fn new(num_states: usize) -> Self {
        Self {
            ids: vec![],
            spans: vec![(0, 0); num_states],
        }
    }

    /// Appends the set of `state_id`: `own` followed by the set of `fail_id`.
    ///
    /// The set of `fail_id` must already be complete.
    pub fn append(&mut self, state_id: u32, own: &[u32], fail_id: u32) {
        let start = self.ids.len();
        self.ids.extend_from_slice(own);
        let (fail_start, fail_len) = self.spans[fail_id as usize];
        self.ids.extend_from_within(fail_start..fail_start + fail_len);
        self.spans[state_id as usize] = (start, self.ids.len() - start);
    }

    #[inline(always)]
    pub fn get(&self, state_id: u32) -> &[u32] {
        let (start, len) = self.spans[state_id as usize];
        &self.ids[start..start + len]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn shrink_to_fit(&mut self) {
        self.ids.shrink_to_fit();
    }

    pub fn heap_bytes(&self) -> usize {
        self.ids.len() * mem::size_of::<u32>()
            + self.spans.len() * mem::size_of::<(usize, usize)>()
    }
}
