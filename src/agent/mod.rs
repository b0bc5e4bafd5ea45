use crate::prelude::*;

pub mod config;
pub mod deadline;
pub mod heuristic;
pub mod observer;
pub mod scalars;
pub mod search;
pub mod searchargs;
pub mod strategies;

pub use config::*;
pub use deadline::*;
pub use heuristic::*;
pub use observer::*;
pub use scalars::*;
pub use search::*;
pub use searchargs::*;
pub use strategies::*;

/// A position in a two-player game, as seen by the searcher.
///
/// Every successor is a distinct value; the searcher never mutates a position.
pub trait Position: Sized
{
    type Successors: Iterator<Item = Self>;

    /// Gets the mark at the given coordinate.
    fn cell_at(&self, coord: Coord) -> Cell;

    /// Generates the positions reachable in one move, lazily. An empty iterator means the game is over.
    fn successors(&self) -> Self::Successors;

    /// The player whose move it is.
    fn to_move(&self) -> Player;
}

/// A policy for choosing the next move on a board.
pub trait Strategy
{
    /// Returns the move to play in the current position, or the null move if there is none.
    fn best_move(&mut self, board: &Board, args: SearchArgs) -> Move;

    /// A short name for logs and the `info` command.
    fn name(&self) -> &'static str;
}
