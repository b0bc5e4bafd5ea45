use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The players in a game of tic-tac-toe.
pub enum Player
{
    X = 0,
    O = 1,
}

impl Player
{
    /// The player who opens every game.
    pub const FIRST: Player = Player::O;

    /// Gets the other player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::X => Self::O,
            | Self::O => Self::X,
        }
    }

    /// The mark this player leaves on the board.
    pub fn mark(&self) -> Cell
    {
        match self
        {
            | Self::X => Cell::X,
            | Self::O => Cell::O,
        }
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::X => "X",
            | Self::O => "O",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "X" | "x" => Ok(Self::X),
            | "O" | "o" => Ok(Self::O),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
