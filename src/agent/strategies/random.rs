use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Picks a uniformly random legal move. Useful as a sparring partner.
pub struct RandomStrategy
{
    rng: StdRng,
}

impl RandomStrategy
{
    /// Creates the strategy, reproducible when a seed is given.
    pub fn new(seed: Option<u64>) -> Self
    {
        let rng = match seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };
        RandomStrategy { rng }
    }
}

impl Strategy for RandomStrategy
{
    fn best_move(&mut self, board: &Board, _args: SearchArgs) -> Move
    {
        board.valid_moves().choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn name(&self) -> &'static str
    {
        "random"
    }
}
