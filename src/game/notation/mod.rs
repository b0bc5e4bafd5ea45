mod game;
mod moves;

pub mod types
{
    pub use super::{
        game::GameString,
        moves::{Move, MoveString},
    };
}
