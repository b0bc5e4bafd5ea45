use arrayvec::ArrayVec;
use itertools::iproduct;
use lazy_static::lazy_static;

use super::{consts::*, Coord, Direction, Variant};

/// A winning line: the cells one player must fill to win.
pub type Line = [Coord; LINE_LENGTH];

lazy_static! {
    static ref SQUARE_LINES: Vec<Line> = generate(Variant::Square);
    static ref CUBE_LINES: Vec<Line> = generate(Variant::Cube);

    /// For every cell, the indices of the lines that pass through it.
    static ref SQUARE_THROUGH: Vec<Vec<usize>> = through(Variant::Square, &SQUARE_LINES);
    static ref CUBE_THROUGH: Vec<Vec<usize>> = through(Variant::Cube, &CUBE_LINES);
}

/// Gets the fixed line table of a variant.
pub fn lines(variant: Variant) -> &'static [Line]
{
    match variant
    {
        | Variant::Square => SQUARE_LINES.as_slice(),
        | Variant::Cube => CUBE_LINES.as_slice(),
    }
}

/// Gets the indices (into `lines(variant)`) of every line through the given cell index.
pub fn lines_through(variant: Variant, index: usize) -> &'static [usize]
{
    match variant
    {
        | Variant::Square => SQUARE_THROUGH[index].as_slice(),
        | Variant::Cube => CUBE_THROUGH[index].as_slice(),
    }
}

/// The thirteen directions whose negations make up the other thirteen neighbours.
///
/// A direction is kept when its first nonzero component is positive.
fn directions() -> impl Iterator<Item = Direction> + Clone
{
    iproduct!(-1i8 ..= 1, -1i8 ..= 1, -1i8 ..= 1).filter(|&(r, c, l)| [r, c, l].into_iter().find(|v| *v != 0).is_some_and(|v| v > 0))
}

/// Enumerates every line of the variant by walking each direction from each cell.
///
/// Since lines span the whole board, a start cell yields a line exactly when all four steps stay in bounds.
fn generate(variant: Variant) -> Vec<Line>
{
    let mut lines = Vec::new();

    for (index, direction) in iproduct!(0 .. variant.cells(), directions())
    {
        let start = variant.coord(index);
        let cells: ArrayVec<Coord, LINE_LENGTH> = (0 .. LINE_LENGTH as i8)
            .map_while(|k| start.step(direction, k).filter(|c| variant.contains(*c)))
            .collect();

        if let Ok(line) = cells.into_inner()
        {
            lines.push(line);
        }
    }

    log::trace!("generated {} lines for the {} board", lines.len(), variant);
    lines
}

fn through(variant: Variant, lines: &[Line]) -> Vec<Vec<usize>>
{
    let mut table = vec![Vec::new(); variant.cells()];
    for (i, line) in lines.iter().enumerate()
    {
        for coord in line
        {
            table[variant.index(*coord)].push(i);
        }
    }
    table
}
