use rand::{rngs::StdRng, seq::SliceRandom};
use tictacmind::prelude::*;

/// Plays the given coordinates in order, alternating players from the start.
pub fn board(variant: Variant, moves: &[Coord]) -> Board
{
    let mut board = Board::new(variant);
    for coord in moves
    {
        let played = board.play(&Move::Place(*coord));
        assert!(played.is_ok(), "\tdue to {}", played.unwrap_err());
    }
    board
}

/// Plays up to `plies` random legal moves, stopping early if the game ends.
pub fn random_board(rng: &mut StdRng, variant: Variant, plies: usize) -> Board
{
    let mut board = Board::new(variant);
    for _ in 0 .. plies
    {
        let moves = board.valid_moves();
        let Some(mv) = moves.choose(rng)
        else
        {
            break;
        };
        board.play(mv).unwrap();
    }
    board
}

/// A full square board where no line is complete.
///
/// ```text
/// o o x x
/// x x o o
/// o o x x
/// x x o o
/// ```
pub fn drawn_square() -> Board
{
    let cells = "ooxxxxooooxxxxoo".chars().map(|c| Cell::try_from(c).unwrap()).collect::<Vec<_>>();
    Board::from_cells(Variant::Square, &cells, Player::O).unwrap()
}

/// Shorthand for a coordinate on the square board.
pub fn sq(row: u8, col: u8) -> Coord
{
    Coord::flat(row, col)
}
