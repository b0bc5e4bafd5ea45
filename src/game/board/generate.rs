use crate::prelude::*;

/// A lazy iterator over the positions reachable by one move, in cell index order.
pub struct Successors
{
    board: Board,
    next:  usize,
}

impl Iterator for Successors
{
    type Item = Board;
    fn next(&mut self) -> Option<Board>
    {
        if self.board.state().finished()
        {
            return None;
        }

        let cells = self.board.cells();
        let index = (self.next .. cells.len()).find(|i| cells[*i].empty())?;
        self.next = index + 1;

        let mut successor = self.board.clone();
        successor.play_unchecked(index);
        Some(successor)
    }
}

impl Successors
{
    fn new(board: &Board) -> Self
    {
        Successors {
            board: board.clone(),
            next:  0,
        }
    }
}

impl Position for Board
{
    type Successors = Successors;

    fn cell_at(&self, coord: Coord) -> Cell
    {
        self.cell(coord)
    }

    fn successors(&self) -> Self::Successors
    {
        Successors::new(self)
    }

    fn to_move(&self) -> Player
    {
        Board::to_move(self)
    }
}
