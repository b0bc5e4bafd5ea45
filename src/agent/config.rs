use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How the alpha-beta strategy searches and scores positions.
pub struct SearchConfig
{
    /// Overrides the per-variant default depth.
    pub depth:   Option<Depth>,
    pub pruning: Pruning,
    pub weights: Weights,
}

impl SearchConfig
{
    /// The depth to search a board of the given variant to, when the search args don't say otherwise.
    pub fn depth_for(&self, variant: Variant) -> Depth
    {
        self.depth.unwrap_or_else(|| variant.default_depth())
    }

    /// Builds the heuristic configuration for a variant.
    pub fn eval_config(&self, variant: Variant) -> Result<EvalConfig>
    {
        EvalConfig::new(variant.lines(), self.weights)
    }
}

impl TryFrom<&Options> for SearchConfig
{
    type Error = Error;
    fn try_from(options: &Options) -> std::result::Result<Self, Self::Error>
    {
        let weights = options.weights.parse::<Weights>()?;
        if options.depth == Some(0)
        {
            return Err(Error::new(Kind::InvalidOption, "Search depth must be at least 1.".into()));
        }

        let config = SearchConfig {
            depth: options.depth.map(Depth::from),
            pruning: if options.no_pruning { Pruning::Disabled } else { Pruning::Enabled },
            weights,
        };

        // Check the weights against the largest line table up front.
        for variant in Variant::all()
        {
            config.eval_config(variant)?;
        }

        Ok(config)
    }
}
