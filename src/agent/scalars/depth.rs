use std::ops::Sub;

use crate::game::consts::MAX_CELLS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A ply-representation of search depth.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl Depth
{
    /// Zero plies; the search evaluates the position in front of it.
    pub const NIL: Depth = Depth::new(0);

    /// Constructs a new depth, clamped to the length of the longest game.
    pub const fn new(plies: u8) -> Depth
    {
        if plies > MAX_CELLS as u8
        {
            Depth(MAX_CELLS as u8)
        }
        else
        {
            Depth(plies)
        }
    }
}

impl Sub<u8> for Depth
{
    type Output = Self;

    /// Stepping below zero stays at zero.
    fn sub(self, rhs: u8) -> Self::Output
    {
        Depth(self.0.saturating_sub(rhs))
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
