use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    #[default]
    NotStarted,
    InProgress,
    Draw,
    XWins,
    OWins,
}

impl GameState
{
    /// Whether no further moves can be played.
    pub fn finished(&self) -> bool
    {
        matches!(self, Self::Draw | Self::XWins | Self::OWins)
    }

    /// The winning state for the given player.
    pub fn won_by(player: Player) -> Self
    {
        match player
        {
            | Player::X => Self::XWins,
            | Player::O => Self::OWins,
        }
    }

    /// The player who won, if anyone did.
    pub fn winner(&self) -> Option<Player>
    {
        match self
        {
            | Self::XWins => Some(Player::X),
            | Self::OWins => Some(Player::O),
            | _ => None,
        }
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::NotStarted => "NotStarted",
            | Self::InProgress => "InProgress",
            | Self::Draw => "Draw",
            | Self::XWins => "XWins",
            | Self::OWins => "OWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "NotStarted" => Ok(Self::NotStarted),
            | "InProgress" => Ok(Self::InProgress),
            | "Draw" => Ok(Self::Draw),
            | "XWins" => Ok(Self::XWins),
            | "OWins" => Ok(Self::OWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
