//! Transition stores of the automaton.

mod dense;
mod sparse;

pub(crate) use dense::DenseTable;
pub(crate) use sparse::SparseTable;

/// Goto function of an automaton under construction or after it.
///
/// `child()` reports explicit transitions only, until `close_root()` is called. After that,
/// every symbol has a transition from the root, the root itself being the default.
pub(crate) trait GotoTable {
    /// Transition label stored by the table.
    type Symbol: Copy;

    /// Maps a text character to the label used by this table.
    fn symbol(&self, c: char) -> Self::Symbol;

    /// Maps a label back to its character. `None` if the label stands for unseen characters.
    fn label(&self, sym: Self::Symbol) -> Option<char>;

    fn num_states(&self) -> usize;

    /// Appends a state without transitions.
    fn push_state(&mut self);

    fn child(&self, state_id: u32, sym: Self::Symbol) -> Option<u32>;

    fn set_child(&mut self, state_id: u32, sym: Self::Symbol, child_id: u32);

    /// Makes the root's transition function total.
    fn close_root(&mut self);

    /// Iterates explicit transitions of the state in label order. Root self-loops are skipped.
    fn edges(&self, state_id: u32) -> impl Iterator<Item = (Self::Symbol, u32)> + '_;

    /// Releases spare capacity once construction is finished.
    fn shrink_to_fit(&mut self);

    fn heap_bytes(&self) -> usize;
}

/// Returns the state reached from `state_id` by reading `c`, following failure links until a
/// transition is found. The loop ends at the latest at the root, whose transitions are total.
#[inline(always)]
pub(crate) fn next_state_id<G>(table: &G, fail: &[u32], mut state_id: u32, c: char) -> u32
where
    G: GotoTable,
{
    let sym = table.symbol(c);
    loop {
        if let Some(next_state_id) = table.child(state_id, sym) {
            return next_state_id;
        }
        state_id = fail[state_id as usize];
    }
}

/// Transition store selected at construction time.
#[derive(Clone, Debug)]
pub(crate) enum Table {
    Sparse(SparseTable),
    Dense(DenseTable),
}

impl Table {
    #[inline(always)]
    pub fn next_state_id(&self, fail: &[u32], state_id: u32, c: char) -> u32 {
        match self {
            Self::Sparse(t) => next_state_id(t, fail, state_id, c),
            Self::Dense(t) => next_state_id(t, fail, state_id, c),
        }
    }

    pub fn edges(&self, state_id: u32) -> Vec<(char, u32)> {
        fn labeled<G: GotoTable>(table: &G, state_id: u32) -> Vec<(char, u32)> {
            table
                .edges(state_id)
                .filter_map(|(sym, child_id)| Some((table.label(sym)?, child_id)))
                .collect()
        }
        match self {
            Self::Sparse(t) => labeled(t, state_id),
            Self::Dense(t) => labeled(t, state_id),
        }
    }

    pub fn num_states(&self) -> usize {
        match self {
            Self::Sparse(t) => t.num_states(),
            Self::Dense(t) => t.num_states(),
        }
    }

    pub fn heap_bytes(&self) -> usize {
        match self {
            Self::Sparse(t) => t.heap_bytes(),
            Self::Dense(t) => t.heap_bytes(),
        }
    }
}
