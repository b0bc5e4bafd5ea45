mod common;
use common::{grid::Grid, *};

#[cfg(test)]
mod heuristic
{
    use rand::{rngs::StdRng, SeedableRng};

    use super::{templates::sq, *};
    use tictacmind::prelude::*;

    fn line_heuristic(variant: Variant) -> LineHeuristic
    {
        LineHeuristic::new(EvalConfig::for_variant(variant))
    }

    #[test]
    fn three_in_a_row_outranks_a_single_mark()
    {
        let _setup = setup::setup();
        let heuristic = line_heuristic(Variant::Square);

        let three = Grid::empty(Variant::Square, Player::O).with(Player::X, &[sq(0, 0), sq(0, 1), sq(0, 2)]);
        let single = Grid::empty(Variant::Square, Player::O).with(Player::X, &[sq(0, 0)]);

        // The row is worth 100, each column 1, and the main diagonal 1.
        assert_eq!(heuristic.evaluate(&three, Player::X), 104);
        assert_eq!(heuristic.evaluate(&single, Player::X), 3);
        assert!(heuristic.evaluate(&three, Player::X) > heuristic.evaluate(&single, Player::X));
    }

    #[test]
    fn empty_board_is_even()
    {
        for variant in Variant::all()
        {
            let grid = Grid::empty(variant, Player::O);
            assert_eq!(line_heuristic(variant).evaluate(&grid, Player::O), 0);
        }
    }

    #[test]
    fn blocked_lines_score_nothing()
    {
        let heuristic = line_heuristic(Variant::Square);
        let grid = Grid::empty(Variant::Square, Player::O)
            .with(Player::X, &[sq(0, 0)])
            .with(Player::O, &[sq(0, 1)]);

        // Row 0 is dead; X keeps column 0 and the diagonal, O keeps column 1.
        assert_eq!(heuristic.evaluate(&grid, Player::X), 1 + 1 - 1);
    }

    #[test]
    fn complete_cube_line_is_exactly_a_win()
    {
        let heuristic = line_heuristic(Variant::Cube);
        let pillar = (0 .. 4).map(|layer| Coord::new(2, 1, layer)).collect::<Vec<_>>();
        let grid = Grid::empty(Variant::Cube, Player::O).with(Player::X, &pillar);

        assert_eq!(heuristic.evaluate(&grid, Player::X), WIN);
        assert_eq!(heuristic.evaluate(&grid, Player::O), -WIN);
    }

    #[test]
    fn complete_line_overrides_threats()
    {
        let heuristic = line_heuristic(Variant::Square);
        let grid = Grid::empty(Variant::Square, Player::X)
            .with(Player::O, &[sq(3, 0), sq(3, 1), sq(3, 2), sq(3, 3)])
            .with(Player::X, &[sq(0, 0), sq(0, 1), sq(0, 2), sq(1, 0), sq(2, 0)]);

        assert_eq!(heuristic.evaluate(&grid, Player::O), WIN);
        assert_eq!(heuristic.evaluate(&grid, Player::X), -WIN);
    }

    #[test]
    #[should_panic]
    fn both_players_winning_is_malformed()
    {
        let heuristic = line_heuristic(Variant::Square);
        let grid = Grid::empty(Variant::Square, Player::O)
            .with(Player::O, &[sq(0, 0), sq(0, 1), sq(0, 2), sq(0, 3)])
            .with(Player::X, &[sq(2, 0), sq(2, 1), sq(2, 2), sq(2, 3)]);
        heuristic.evaluate(&grid, Player::O);
    }

    #[test]
    fn swapping_marks_negates_the_score()
    {
        let mut rng = StdRng::seed_from_u64(0x7777);
        for variant in Variant::all()
        {
            let heuristic = line_heuristic(variant);
            for plies in 0 .. 24
            {
                let board = templates::random_board(&mut rng, variant, plies);
                let grid = Grid::from_board(&board);

                let score = heuristic.evaluate(&grid, Player::X);
                assert_eq!(heuristic.evaluate(&grid.swapped(), Player::X), -score, "{}", board);
                assert_eq!(heuristic.evaluate(&board, Player::O), -score, "{}", board);
            }
        }
    }

    #[test]
    fn mirroring_keeps_the_score()
    {
        let mut rng = StdRng::seed_from_u64(0xb0a4d);
        for variant in Variant::all()
        {
            let heuristic = line_heuristic(variant);
            let axes = if variant == Variant::Square { 0 .. 2 } else { 0 .. 3 };

            for plies in 1 .. 20
            {
                let grid = Grid::from_board(&templates::random_board(&mut rng, variant, plies));
                let score = heuristic.evaluate(&grid, Player::O);

                for axis in axes.clone()
                {
                    assert_eq!(heuristic.evaluate(&grid.mirrored(axis), Player::O), score);
                }
            }
        }
    }

    #[test]
    fn custom_weights()
    {
        let weights = "2,20,200".parse::<Weights>().unwrap();
        let config = EvalConfig::new(Variant::Square.lines(), weights).unwrap();
        let grid = Grid::empty(Variant::Square, Player::O).with(Player::X, &[sq(0, 0), sq(0, 1), sq(0, 2)]);

        assert_eq!(LineHeuristic::new(config).evaluate(&grid, Player::X), 208);
    }

    #[test]
    fn default_weights_parse()
    {
        assert_eq!("1,10,100".parse::<Weights>().unwrap(), Weights::default());
        assert_eq!(Weights::default().to_string(), "1,10,100");
    }

    #[test]
    fn bad_weights()
    {
        assert_eq!("1,10".parse::<Weights>().unwrap_err().kind, Kind::ParseError);
        assert_eq!("a,b,c".parse::<Weights>().unwrap_err().kind, Kind::ParseError);
        assert_eq!(Weights::new([10, 10, 100]).unwrap_err().kind, Kind::InvalidOption);
        assert_eq!(Weights::new([0, 10, 100]).unwrap_err().kind, Kind::InvalidOption);
    }

    #[test]
    fn weights_must_stay_below_a_win()
    {
        let weights = Weights::new([1, 100, 20_000]).unwrap();

        // 10 lines at 20 000 fit under the sentinel, 76 do not.
        assert!(EvalConfig::new(Variant::Square.lines(), weights).is_ok());
        assert_eq!(EvalConfig::new(Variant::Cube.lines(), weights).unwrap_err().kind, Kind::InvalidOption);
        assert!(EvalConfig::new(Variant::Cube.lines(), Weights::default()).is_ok());
    }
}
