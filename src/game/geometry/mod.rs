mod coord;
mod lines;

pub use coord::{Coord, Direction};
pub use lines::{lines, lines_through, Line};

use crate::prelude::*;

/// Values that bound the size of every supported board.
pub mod consts
{
    /// The number of cells along each axis.
    pub const WIDTH: u8 = 4;

    /// The number of marks in a row needed to win.
    pub const LINE_LENGTH: usize = 4;

    /// The cell count of the largest board.
    pub const MAX_CELLS: usize = (WIDTH as usize).pow(3);

    const _LINES_SPAN_BOARD: () = assert!(LINE_LENGTH == WIDTH as usize);
}

use consts::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The shape of the board.
pub enum Variant
{
    /// A flat 4×4 board.
    Square,

    /// A 4×4×4 cube.
    #[default]
    Cube,
}

impl Variant
{
    /// Both variants, smallest first.
    pub fn all() -> [Variant; 2]
    {
        [Variant::Square, Variant::Cube]
    }

    /// The number of cells on the board.
    pub const fn cells(&self) -> usize
    {
        self.layers() as usize * (WIDTH as usize) * (WIDTH as usize)
    }

    /// Whether the coordinate lies on this board.
    pub fn contains(&self, coord: Coord) -> bool
    {
        coord.row < WIDTH && coord.col < WIDTH && coord.layer < self.layers()
    }

    /// Converts a cell index back into its coordinate.
    pub fn coord(&self, index: usize) -> Coord
    {
        assert!(index < self.cells(), "cell {} is outside the {} board", index, self);
        let w = WIDTH as usize;
        Coord::new((index / w % w) as u8, (index % w) as u8, (index / (w * w)) as u8)
    }

    /// The fixed search depth used when nothing else is configured.
    pub fn default_depth(&self) -> Depth
    {
        match self
        {
            | Variant::Square => Depth::new(3),
            | Variant::Cube => Depth::new(2),
        }
    }

    /// Gets the cell index of a coordinate, numbering layer by layer, then row by row.
    pub fn index(&self, coord: Coord) -> usize
    {
        assert!(self.contains(coord), "{} is outside the {} board", coord, self);
        let w = WIDTH as usize;
        coord.layer as usize * w * w + coord.row as usize * w + coord.col as usize
    }

    /// The number of layers stacked on top of each other.
    pub const fn layers(&self) -> u8
    {
        match self
        {
            | Variant::Square => 1,
            | Variant::Cube => WIDTH,
        }
    }

    /// The winning lines of this board.
    pub fn lines(&self) -> &'static [Line]
    {
        lines(*self)
    }
}

impl std::fmt::Display for Variant
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Variant::Square => "Square",
            | Variant::Cube => "Cube",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Variant
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Square" | "square" | "2d" => Ok(Variant::Square),
            | "Cube" | "cube" | "3d" => Ok(Variant::Cube),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
