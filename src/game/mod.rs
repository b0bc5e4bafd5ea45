pub(crate) mod board;
pub mod geometry;
pub(crate) mod notation;
pub mod piece;

pub use board::{Board, GameState, History, Successors};
pub use geometry::{consts, lines, lines_through, Coord, Direction, Line, Variant};
pub use notation::types::*;
pub use piece::{Cell, Player};
