use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The cells marked since the board was created or loaded, oldest first.
///
/// Positions loaded from a game string start with an empty history, so they cannot be undone past.
pub struct History
{
    past: ArrayVec<u8, MAX_CELLS>,
}

impl History
{
    /// The most recently marked cell.
    pub fn last(&self) -> Option<usize>
    {
        self.past.last().map(|i| *i as usize)
    }

    /// The number of moves in the history.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Removes and returns the most recent move.
    pub(super) fn pop(&mut self) -> Option<usize>
    {
        self.past.pop().map(|i| i as usize)
    }

    /// Records a new move.
    pub(super) fn push(&mut self, index: usize)
    {
        self.past.push(index as u8);
    }
}
