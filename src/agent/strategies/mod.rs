mod alphabeta;
mod random;

pub use alphabeta::AlphaBetaStrategy;
pub use random::RandomStrategy;

use clap::ValueEnum;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// The strategies selectable from the command line.
pub enum StrategyKind
{
    #[default]
    Alphabeta,
    Random,
}

impl StrategyKind
{
    /// Instantiates the strategy.
    pub fn build(&self, options: &Options) -> Result<Box<dyn Strategy>>
    {
        Ok(match self
        {
            | StrategyKind::Alphabeta => Box::new(AlphaBetaStrategy::new(SearchConfig::try_from(options)?)?),
            | StrategyKind::Random => Box::new(RandomStrategy::new(options.seed)),
        })
    }
}
