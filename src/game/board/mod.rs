use crate::prelude::*;

mod generate;
mod history;
mod printers;
mod state;

pub use generate::Successors;
pub use history::History;
pub use state::GameState;

#[derive(Clone, PartialEq, Eq)]
/// A tic-tac-toe board of either variant.
pub struct Board
{
    /// Every cell of the largest board; only the first `variant.cells()` are in play.
    cells: [Cell; MAX_CELLS],

    /// The moves played on this board since it was created or loaded.
    history: History,

    /// The cached outcome, kept in sync with every play and undo.
    state: GameState,

    /// The player who places the next mark.
    to_move: Player,

    /// The shape of the board.
    variant: Variant,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new(Variant::default())
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            write!(f, "{}", GameString::from(self))
        }
    }
}

impl Board
{
    /// Gets the mark at the given coordinate.
    pub fn cell(&self, coord: Coord) -> Cell
    {
        self.cells[self.variant.index(coord)]
    }

    /// The cells in play, in index order.
    pub fn cells(&self) -> &[Cell]
    {
        &self.cells[.. self.variant.cells()]
    }

    /// Ensures a move is valid in the current position, returning the index of the cell it marks.
    pub fn check(&self, mv: &Move) -> Result<usize>
    {
        let Move::Place(coord) = mv
        else
        {
            return Err(Error::new(Kind::InvalidMove, "The null move cannot be played.".into()));
        };

        if self.state.finished()
        {
            return Err(Error::new(Kind::GameOver, format!("The game has already ended ({}).", self.state)));
        }

        if !self.variant.contains(*coord)
        {
            return Err(Error::new(Kind::OutOfBounds, format!("{} is not on the {} board.", coord, self.variant)));
        }

        let index = self.variant.index(*coord);
        if !self.cells[index].empty()
        {
            return Err(Error::new(Kind::OccupiedCell, format!("{} is already marked by {}.", coord, self.cells[index])));
        }

        Ok(index)
    }

    /// Creates a position from raw cells, checking that the marks could have been reached by legal play.
    pub fn from_cells(variant: Variant, cells: &[Cell], to_move: Player) -> Result<Board>
    {
        if cells.len() != variant.cells()
        {
            let err_msg = format!("A {} board has {} cells, but {} were given.", variant, variant.cells(), cells.len());
            return Err(Error::new(Kind::InvalidState, err_msg));
        }

        let count = |player: Player| cells.iter().filter(|c| c.is(player)).count();
        let (first, second) = (count(Player::FIRST), count(Player::FIRST.flip()));

        let expected = if first == second
        {
            Player::FIRST
        }
        else if first == second + 1
        {
            Player::FIRST.flip()
        }
        else
        {
            let err_msg = format!("{} has {} marks and {} has {}.", Player::FIRST, first, Player::FIRST.flip(), second);
            return Err(Error::new(Kind::InvalidState, err_msg));
        };

        if expected != to_move
        {
            return Err(Error::mismatch(expected, to_move));
        }

        let mut board = Board::new(variant);
        board.cells[.. cells.len()].copy_from_slice(cells);
        board.to_move = to_move;
        board.state = board.scan_state()?;

        if board.state.winner() == Some(to_move)
        {
            let err_msg = format!("{} has already won, but the game continued.", to_move);
            return Err(Error::new(Kind::InvalidState, err_msg));
        }

        Ok(board)
    }

    /// Gets the history of this board.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// The move that produced this position, or the null move if there is none on record.
    pub fn last_move(&self) -> Move
    {
        self.history
            .last()
            .map(|index| Move::Place(self.variant.coord(index)))
            .unwrap_or_default()
    }

    /// The number of marks on the board.
    pub fn marks(&self) -> usize
    {
        self.cells().iter().filter(|c| !c.empty()).count()
    }

    /// Returns an empty board of the given variant.
    pub fn new(variant: Variant) -> Board
    {
        Board {
            cells: [Cell::Empty; MAX_CELLS],
            history: History::default(),
            state: GameState::NotStarted,
            to_move: Player::FIRST,
            variant,
        }
    }

    /// Plays a move, if it is legal.
    pub fn play(&mut self, mv: &Move) -> Result<()>
    {
        let index = self.check(mv)?;
        self.play_unchecked(index);
        Ok(())
    }

    /// Marks the given cell for the player to move, without validating it.
    pub fn play_unchecked(&mut self, index: usize)
    {
        let player = self.to_move;
        self.cells[index] = player.mark();
        self.history.push(index);
        self.to_move = player.flip();

        self.state = if self.completes_line(index, player)
        {
            GameState::won_by(player)
        }
        else if self.marks() == self.variant.cells()
        {
            GameState::Draw
        }
        else
        {
            GameState::InProgress
        };
    }

    /// Gets the state of the game.
    pub fn state(&self) -> GameState
    {
        self.state
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// The 1-indexed number of the upcoming turn.
    pub fn turn(&self) -> usize
    {
        self.marks() + 1
    }

    /// Undoes the given number of moves.
    pub fn undo(&mut self, n: u8) -> Result<()>
    {
        if n as usize > self.history.len()
        {
            let err_msg = format!("Cannot undo {} moves with only {} on record.", n, self.history.len());
            return Err(Error::new(Kind::TooManyUndos, err_msg));
        }

        for _ in 0 .. n
        {
            if let Some(index) = self.history.pop()
            {
                self.cells[index] = Cell::Empty;
                self.to_move = self.to_move.flip();
            }
        }

        self.state = self.scan_state()?;
        Ok(())
    }

    /// Lists every legal move in index order.
    pub fn valid_moves(&self) -> Vec<Move>
    {
        if self.state.finished()
        {
            return Vec::new();
        }

        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.empty())
            .map(|(index, _)| Move::Place(self.variant.coord(index)))
            .collect()
    }

    /// Gets the variant of this board.
    pub fn variant(&self) -> Variant
    {
        self.variant
    }
}

impl Board
{
    /// Whether the player's mark at `index` finishes one of the lines through it.
    fn completes_line(&self, index: usize, player: Player) -> bool
    {
        let lines = self.variant.lines();
        lines_through(self.variant, index)
            .iter()
            .any(|&i| lines[i].iter().all(|coord| self.cell(*coord).is(player)))
    }

    /// Determines the state from scratch by checking every line.
    fn scan_state(&self) -> Result<GameState>
    {
        let won = |player: Player| {
            self.variant
                .lines()
                .iter()
                .any(|line| line.iter().all(|coord| self.cell(*coord).is(player)))
        };

        match (won(Player::X), won(Player::O))
        {
            | (true, true) => Err(Error::new(Kind::InvalidState, "Both players have completed a line.".into())),
            | (true, false) => Ok(GameState::XWins),
            | (false, true) => Ok(GameState::OWins),
            | (false, false) => Ok(match self.marks()
            {
                | 0 => GameState::NotStarted,
                | n if n == self.variant.cells() => GameState::Draw,
                | _ => GameState::InProgress,
            }),
        }
    }
}
