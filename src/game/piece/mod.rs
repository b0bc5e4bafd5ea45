use crate::prelude::*;

mod player;

pub use player::Player;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The contents of a single cell on the board.
pub enum Cell
{
    #[default]
    Empty = 0,
    X = 1,
    O = 2,
}

impl Cell
{
    /// Whether nobody has marked this cell yet.
    pub fn empty(&self) -> bool
    {
        *self == Cell::Empty
    }

    /// Whether this cell carries the given player's mark.
    pub fn is(&self, player: Player) -> bool
    {
        self.owner() == Some(player)
    }

    /// Gets the player who marked this cell, if any.
    pub fn owner(&self) -> Option<Player>
    {
        match self
        {
            | Cell::Empty => None,
            | Cell::X => Some(Player::X),
            | Cell::O => Some(Player::O),
        }
    }

    /// The same cell with the players' marks swapped.
    pub fn swapped(&self) -> Cell
    {
        match self
        {
            | Cell::Empty => Cell::Empty,
            | Cell::X => Cell::O,
            | Cell::O => Cell::X,
        }
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let ch = match self
        {
            | Cell::Empty => '.',
            | Cell::X => 'x',
            | Cell::O => 'o',
        };
        write!(f, "{ch}")
    }
}

impl TryFrom<char> for Cell
{
    type Error = Error;
    fn try_from(value: char) -> std::result::Result<Self, Self::Error>
    {
        match value
        {
            | '.' => Ok(Cell::Empty),
            | 'x' | 'X' => Ok(Cell::X),
            | 'o' | 'O' => Ok(Cell::O),
            | _ => Err(Error::for_parse::<Self>(value.into())),
        }
    }
}
