use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Represents a syntactically-valid move string, such as `1,2` or `1,2,3` (row, column, layer).
///
/// Whether the move is legal depends on a board.
pub struct MoveString(pub(in crate::game::notation) String);

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        if s == "null"
        {
            return Ok(MoveString(s.into()));
        }

        let re = Regex::new(r"^(?<row>[0-9]),(?<col>[0-9])(,(?<layer>[0-9]))?$").unwrap();
        if !re.is_match(s)
        {
            return Err(Error::for_parse::<Self>(s.into()));
        }

        Ok(MoveString(s.to_owned()))
    }
}

impl MoveString
{
    /// Writes a move as it is addressed on the given board: `r,c` on the square, `r,c,l` in the cube.
    pub fn on(variant: Variant, mv: Move) -> MoveString
    {
        match (variant, mv)
        {
            | (Variant::Cube, Move::Place(c)) => MoveString(format!("{},{},{}", c.row, c.col, c.layer)),
            | _ => mv.into(),
        }
    }
}

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// A single move: marking one cell, or the null move that stands in for "no legal move".
pub enum Move
{
    Place(Coord),
    #[default]
    Null,
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let s: MoveString = (*self).into();
        s.fmt(f)
    }
}

impl From<Move> for MoveString
{
    /// Without a board to go by, layer 0 is left out.
    fn from(value: Move) -> MoveString
    {
        let s: String = match value
        {
            | Move::Place(c) if c.layer == 0 => format!("{},{}", c.row, c.col),
            | Move::Place(c) => format!("{},{},{}", c.row, c.col, c.layer),
            | Move::Null => "null".into(),
        };
        MoveString(s)
    }
}

impl From<&MoveString> for Move
{
    /// Reads the coordinates back out. A missing layer means layer 0.
    fn from(value: &MoveString) -> Move
    {
        if value.0 == "null"
        {
            return Move::Null;
        }

        let mut parts = value.0.split(',').map(|p| p.parse::<u8>().unwrap_or(u8::MAX));
        let row = parts.next().unwrap_or(u8::MAX);
        let col = parts.next().unwrap_or(u8::MAX);
        let layer = parts.next().unwrap_or(0);
        Move::Place(Coord::new(row, col, layer))
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let ms = s.parse::<MoveString>()?;
        Ok(Move::from(&ms))
    }
}
