use super::consts::*;

/// A step between cells, as (row, col, layer) offsets in `-1..=1`.
pub type Direction = (i8, i8, i8);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A row-column-layer coordinate. Square boards only use layer 0.
pub struct Coord
{
    pub row:   u8,
    pub col:   u8,
    pub layer: u8,
}

impl Coord
{
    /// Constructs a coordinate on the square board.
    pub const fn flat(row: u8, col: u8) -> Coord
    {
        Coord { row, col, layer: 0 }
    }

    /// Constructs a coordinate in the cube.
    pub const fn new(row: u8, col: u8, layer: u8) -> Coord
    {
        Coord { row, col, layer }
    }

    /// Walks `k` steps along the given direction, if that stays inside a full cube.
    pub fn step(&self, direction: Direction, k: i8) -> Option<Coord>
    {
        let axis = |base: u8, delta: i8| {
            let v = base as i8 + delta * k;
            (0 .. WIDTH as i8).contains(&v).then_some(v as u8)
        };

        Some(Coord {
            row:   axis(self.row, direction.0)?,
            col:   axis(self.col, direction.1)?,
            layer: axis(self.layer, direction.2)?,
        })
    }

    /// Reflects this coordinate across the middle of the given axis (0 = row, 1 = col, 2 = layer).
    pub fn mirrored(&self, axis: usize) -> Coord
    {
        let flip = |v: u8| WIDTH - 1 - v;
        match axis
        {
            | 0 => Coord { row: flip(self.row), ..*self },
            | 1 => Coord { col: flip(self.col), ..*self },
            | _ => Coord { layer: flip(self.layer), ..*self },
        }
    }
}

impl std::fmt::Display for Coord
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({},{},{})", self.row, self.col, self.layer)
    }
}
