use crate::prelude::*;

#[derive(Clone, Debug)]
/// Picks moves with the fixed-depth alpha-beta searcher and the line-counting heuristic.
pub struct AlphaBetaStrategy
{
    config: SearchConfig,
    square: EvalConfig,
    cube:   EvalConfig,
}

impl AlphaBetaStrategy
{
    /// Creates the strategy, failing if the weights are too large for either board.
    pub fn new(config: SearchConfig) -> Result<Self>
    {
        Ok(AlphaBetaStrategy {
            square: config.eval_config(Variant::Square)?,
            cube: config.eval_config(Variant::Cube)?,
            config,
        })
    }

    /// The searcher for a board of the given variant.
    pub fn searcher(&self, variant: Variant, args: SearchArgs) -> Searcher<LineHeuristic>
    {
        let eval = match variant
        {
            | Variant::Square => self.square,
            | Variant::Cube => self.cube,
        };
        let depth = args.depth().unwrap_or_else(|| self.config.depth_for(variant));

        Searcher::new(LineHeuristic::new(eval), depth).with_pruning(self.config.pruning)
    }
}

impl Strategy for AlphaBetaStrategy
{
    fn best_move(&mut self, board: &Board, args: SearchArgs) -> Move
    {
        let searcher = self.searcher(board.variant(), args);
        let deadline = args.deadline();

        match searcher.play(board, &deadline)
        {
            | Some(successor) => successor.last_move(),
            | None => Move::Null,
        }
    }

    fn name(&self) -> &'static str
    {
        "alphabeta"
    }
}
