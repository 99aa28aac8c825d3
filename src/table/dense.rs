use core::mem;

use crate::mapper::Alphabet;
use crate::table::GotoTable;
use crate::ROOT_STATE_ID;

// Cell value of an undefined transition.
const UNDEFINED: u32 = u32::MAX;

/// Transition store keeping one row per state in a contiguous array.
///
/// Columns are the codes given by [`Alphabet`], plus one last column for characters that do
/// not occur in any pattern. Only the root ever has a defined transition in that column.
#[derive(Clone, Debug)]
pub(crate) struct DenseTable {
    alphabet: Alphabet,
    num_columns: usize,
    cells: Vec<u32>,
}

impl DenseTable {
    pub fn new(alphabet: Alphabet) -> Self {
        let num_columns = alphabet.num_columns();
        Self {
            alphabet,
            num_columns,
            cells: vec![UNDEFINED; num_columns],
        }
    }

    #[inline(always)]
    fn row(&self, state_id: u32) -> &[u32] {
        let start = state_id as usize * self.num_columns;
        &self.cells[start..start + self.num_columns]
    }
}

impl GotoTable for DenseTable {
    type Symbol = u32;

    #[inline(always)]
    fn symbol(&self, c: char) -> u32 {
        self.alphabet.get(c)
    }

    #[inline(always)]
    fn label(&self, code: u32) -> Option<char> {
        self.alphabet.char_of(code)
    }

    #[inline(always)]
    fn num_states(&self) -> usize {
        self.cells.len() / self.num_columns
    }

    fn push_state(&mut self) {
        self.cells.resize(self.cells.len() + self.num_columns, UNDEFINED);
    }

    #[inline(always)]
    fn child(&self, state_id: u32, code: u32) -> Option<u32> {
        let next = self.cells[state_id as usize * self.num_columns + code as usize];
        (next != UNDEFINED).then_some(next)
    }

    fn set_child(&mut self, state_id: u32, code: u32, child_id: u32) {
        self.cells[state_id as usize * self.num_columns + code as usize] = child_id;
    }

    fn close_root(&mut self) {
        for cell in &mut self.cells[..self.num_columns] {
            if *cell == UNDEFINED {
                *cell = ROOT_STATE_ID;
            }
        }
    }

    fn edges(&self, state_id: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        // No explicit transition targets the root, so root-bound cells are the closed ones.
        self.row(state_id)
            .iter()
            .enumerate()
            .filter(|(_, &child_id)| child_id != UNDEFINED && child_id != ROOT_STATE_ID)
            .map(|(code, &child_id)| (code as u32, child_id))
    }

    fn shrink_to_fit(&mut self) {
        self.cells.shrink_to_fit();
    }

    fn heap_bytes(&self) -> usize {
        self.cells.len() * mem::size_of::<u32>() + self.alphabet.heap_bytes()
    }
}
