use tictacmind::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A bare position that holds any arrangement of marks, reachable or not.
///
/// Successors mark each empty cell in turn and never stop for a completed line.
pub struct Grid
{
    pub variant: Variant,
    pub cells:   Vec<Cell>,
    pub to_move: Player,
}

impl Grid
{
    pub fn empty(variant: Variant, to_move: Player) -> Grid
    {
        Grid {
            variant,
            cells: vec![Cell::Empty; variant.cells()],
            to_move,
        }
    }

    pub fn from_board(board: &Board) -> Grid
    {
        Grid {
            variant: board.variant(),
            cells:   board.cells().to_vec(),
            to_move: board.to_move(),
        }
    }

    /// Marks each coordinate for the given player.
    pub fn with(mut self, player: Player, coords: &[Coord]) -> Grid
    {
        for coord in coords
        {
            self.cells[self.variant.index(*coord)] = player.mark();
        }
        self
    }

    /// Reflects every mark across the middle of an axis.
    pub fn mirrored(&self, axis: usize) -> Grid
    {
        let mut cells = vec![Cell::Empty; self.cells.len()];
        for (i, cell) in self.cells.iter().enumerate()
        {
            let target = self.variant.coord(i).mirrored(axis);
            cells[self.variant.index(target)] = *cell;
        }
        Grid { cells, ..self.clone() }
    }

    /// Exchanges the two players' marks and whose turn it is.
    pub fn swapped(&self) -> Grid
    {
        Grid {
            variant: self.variant,
            cells:   self.cells.iter().map(|c| c.swapped()).collect(),
            to_move: self.to_move.flip(),
        }
    }
}

impl Position for Grid
{
    type Successors = std::vec::IntoIter<Grid>;

    fn cell_at(&self, coord: Coord) -> Cell
    {
        self.cells[self.variant.index(coord)]
    }

    fn successors(&self) -> Self::Successors
    {
        let mut next = Vec::new();
        for (i, cell) in self.cells.iter().enumerate()
        {
            if cell.empty()
            {
                let mut child = self.clone();
                child.cells[i] = self.to_move.mark();
                child.to_move = self.to_move.flip();
                next.push(child);
            }
        }
        next.into_iter()
    }

    fn to_move(&self) -> Player
    {
        self.to_move
    }
}
