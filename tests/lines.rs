mod common;
use common::*;

#[cfg(test)]
mod lines
{
    use std::collections::HashSet;

    use super::*;
    use tictacmind::prelude::*;

    #[test]
    fn square_has_ten_lines()
    {
        let _setup = setup::setup();
        assert_eq!(Variant::Square.lines().len(), 10);
    }

    #[test]
    fn cube_has_seventy_six_lines()
    {
        let _setup = setup::setup();
        assert_eq!(Variant::Cube.lines().len(), 76);
    }

    #[test]
    fn lines_are_straight_and_on_the_board()
    {
        for variant in Variant::all()
        {
            for line in variant.lines()
            {
                assert!(line.iter().all(|c| variant.contains(*c)), "{:?} leaves the {} board", line, variant);

                let step = |a: Coord, b: Coord| {
                    (b.row as i8 - a.row as i8, b.col as i8 - a.col as i8, b.layer as i8 - a.layer as i8)
                };
                let direction = step(line[0], line[1]);
                assert_ne!(direction, (0, 0, 0));
                assert!(line.windows(2).all(|w| step(w[0], w[1]) == direction), "{:?} is not straight", line);
            }
        }
    }

    #[test]
    fn lines_are_unique()
    {
        for variant in Variant::all()
        {
            let sets = variant
                .lines()
                .iter()
                .map(|line| {
                    let mut cells = line.iter().map(|c| variant.index(*c)).collect::<Vec<_>>();
                    cells.sort();
                    cells
                })
                .collect::<HashSet<_>>();
            assert_eq!(sets.len(), variant.lines().len());
        }
    }

    #[test]
    fn square_lines_stay_on_layer_zero()
    {
        assert!(Variant::Square.lines().iter().flatten().all(|c| c.layer == 0));
    }

    #[test]
    fn square_lines_through_cells()
    {
        let through = |row, col| lines_through(Variant::Square, Variant::Square.index(templates::sq(row, col))).len();

        // Corners and the middle four sit on a diagonal.
        assert_eq!(through(0, 0), 3);
        assert_eq!(through(3, 0), 3);
        assert_eq!(through(1, 1), 3);
        assert_eq!(through(2, 1), 3);

        // Edges only have their row and column.
        assert_eq!(through(0, 1), 2);
        assert_eq!(through(2, 3), 2);
    }

    #[test]
    fn cube_lines_through_cells()
    {
        let through = |row, col, layer| lines_through(Variant::Cube, Variant::Cube.index(Coord::new(row, col, layer))).len();

        // Corners and the inner eight cells are on seven lines, every other cell on four.
        assert_eq!(through(0, 0, 0), 7);
        assert_eq!(through(3, 3, 3), 7);
        assert_eq!(through(1, 2, 1), 7);
        assert_eq!(through(0, 1, 0), 4);
        assert_eq!(through(1, 1, 0), 4);

        let total: usize = (0 .. Variant::Cube.cells()).map(|i| lines_through(Variant::Cube, i).len()).sum();
        assert_eq!(total, 76 * consts::LINE_LENGTH);
    }

    #[test]
    fn lines_through_point_back_at_their_cell()
    {
        for variant in Variant::all()
        {
            for index in 0 .. variant.cells()
            {
                for line in lines_through(variant, index)
                {
                    let coords = variant.lines()[*line];
                    assert!(coords.contains(&variant.coord(index)));
                }
            }
        }
    }

    #[test]
    fn coordinates_round_trip_through_indices()
    {
        for variant in Variant::all()
        {
            for index in 0 .. variant.cells()
            {
                assert_eq!(variant.index(variant.coord(index)), index);
            }
        }

        assert_eq!(Variant::Cube.index(Coord::new(1, 2, 3)), 54);
    }
}
