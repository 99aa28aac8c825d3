use core::mem;
use std::collections::BTreeMap;

use crate::table::GotoTable;
use crate::ROOT_STATE_ID;

/// Mapping edge labels to child ids using `BTreeMap`.
type EdgeMap = BTreeMap<char, u32>;

/// Transition store keeping an ordered edge map per state.
///
/// Root totality is not materialized: after `close_root()`, a missing root transition is
/// answered with the root itself.
#[derive(Clone, Debug)]
pub(crate) struct SparseTable {
    states: Vec<EdgeMap>,
    root_closed: bool,
}

impl SparseTable {
    pub fn new() -> Self {
        Self {
            states: vec![EdgeMap::new()],
            root_closed: false,
        }
    }
}

impl GotoTable for SparseTable {
    type Symbol = char;

    #[inline(always)]
    fn symbol(&self, c: char) -> char {
        c
    }

    #[inline(always)]
    fn label(&self, sym: char) -> Option<char> {
        Some(sym)
    }

    #[inline(always)]
    fn num_states(&self) -> usize {
        self.states.len()
    }

    fn push_state(&mut self) {
        self.states.push(EdgeMap::new());
    }

    #[inline(always)]
    fn child(&self, state_id: u32, c: char) -> Option<u32> {
        self.states[state_id as usize]
            .get(&c)
            .copied()
            .or_else(|| (state_id == ROOT_STATE_ID && self.root_closed).then_some(ROOT_STATE_ID))
    }

    fn set_child(&mut self, state_id: u32, c: char, child_id: u32) {
        self.states[state_id as usize].insert(c, child_id);
    }

    fn close_root(&mut self) {
        self.root_closed = true;
    }

    fn edges(&self, state_id: u32) -> impl Iterator<Item = (char, u32)> + '_ {
        self.states[state_id as usize]
            .iter()
            .map(|(&c, &child_id)| (c, child_id))
    }

    fn shrink_to_fit(&mut self) {
        self.states.shrink_to_fit();
    }

    // Approximation: B-tree node overhead is not counted.
    fn heap_bytes(&self) -> usize {
        let num_edges: usize = self.states.iter().map(EdgeMap::len).sum();
        self.states.len() * mem::size_of::<EdgeMap>()
            + num_edges * (mem::size_of::<char>() + mem::size_of::<u32>())
    }
}
