use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a full position: `Variant;GameState;ToMove;cells`.
///
/// The cells are written in index order using `.`, `x` and `o`, for example
/// `Square;InProgress;X;o...............`.
pub struct GameString
{
    pub variant: Variant,
    pub state:   GameState,
    pub to_move: Player,
    pub cells:   Vec<Cell>,
}

impl std::fmt::Display for GameString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let cells = self.cells.iter().map(|c| c.to_string()).collect::<String>();
        write!(f, "{};{};{};{}", self.variant, self.state, self.to_move, cells)
    }
}

impl FromStr for GameString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let parts: Vec<&str> = s.trim().split(';').collect();
        if parts.len() != 4
        {
            let err = Error::new(Kind::ParseError, format!("Expected 4 fields, found {}.", parts.len()));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let variant = parts[0].parse::<Variant>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let state = parts[1].parse::<GameState>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let to_move = parts[2].parse::<Player>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let cells = parts[3]
            .chars()
            .map(Cell::try_from)
            .collect::<Result<Vec<Cell>>>()
            .map_err(|err| err.chain_parse::<Self>(s.into()))?;

        // Make sure the position is reachable, and that it agrees with the stated outcome.
        let board = Board::from_cells(variant, &cells, to_move).map_err(|err| err.chain_parse::<Self>(s.into()))?;
        if board.state() != state
        {
            let err = Error::mismatch(board.state(), state);
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(GameString {
            variant,
            state,
            to_move,
            cells,
        })
    }
}

impl From<&Board> for GameString
{
    fn from(board: &Board) -> Self
    {
        GameString {
            variant: board.variant(),
            state:   board.state(),
            to_move: board.to_move(),
            cells:   board.cells().to_vec(),
        }
    }
}

impl TryFrom<GameString> for Board
{
    type Error = Error;
    fn try_from(value: GameString) -> std::result::Result<Self, Self::Error>
    {
        Board::from_cells(value.variant, &value.cells, value.to_move)
    }
}
