use crate::prelude::*;

/// Scores a position without looking ahead.
pub trait Heuristic<P: Position>
{
    /// Returns the score of the position from the maximizer's point of view.
    fn evaluate(&self, position: &P, maximizer: Player) -> Score;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The value of an unblocked line, indexed by how many marks it holds.
///
/// A full line is not a tier; it is always worth `WIN`.
pub struct Weights([Score; LINE_LENGTH]);

impl Default for Weights
{
    /// One, two and three marks are worth 1, 10 and 100.
    fn default() -> Self
    {
        Weights([0, 1, 10, 100])
    }
}

impl Weights
{
    /// The largest tier.
    pub fn max(&self) -> Score
    {
        self.0[LINE_LENGTH - 1]
    }

    /// Creates weights for one, two and three marks, which must be positive and strictly increasing.
    pub fn new(tiers: [Score; LINE_LENGTH - 1]) -> Result<Weights>
    {
        if tiers[0] <= 0 || tiers.windows(2).any(|w| w[0] >= w[1])
        {
            let err_msg = format!("Line weights must be positive and strictly increasing, found {:?}.", tiers);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        let mut all = [0; LINE_LENGTH];
        all[1 ..].copy_from_slice(&tiers);
        Ok(Weights(all))
    }

    /// The value of a line holding `count` marks of a single player.
    pub fn tier(&self, count: usize) -> Score
    {
        self.0[count]
    }
}

impl std::fmt::Display for Weights
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let tiers = self.0[1 ..].iter().map(|t| t.to_string()).collect::<Vec<_>>();
        write!(f, "{}", tiers.join(","))
    }
}

impl FromStr for Weights
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let parsed = s.split(',').map(|t| t.trim().parse::<Score>()).collect::<std::result::Result<Vec<_>, _>>();
        let Ok(tiers) = parsed
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let Ok(tiers) = <[Score; LINE_LENGTH - 1]>::try_from(tiers)
        else
        {
            let err = Error::new(Kind::ParseError, format!("Expected {} comma-separated tiers.", LINE_LENGTH - 1));
            return Err(err.chain_parse::<Self>(s.into()));
        };

        Weights::new(tiers).map_err(|err| err.chain_parse::<Self>(s.into()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The line table and weighting that the heuristic scores a board with.
pub struct EvalConfig
{
    lines:   &'static [Line],
    weights: Weights,
}

impl EvalConfig
{
    /// The default weighting on the variant's line table.
    pub fn for_variant(variant: Variant) -> EvalConfig
    {
        EvalConfig {
            lines:   variant.lines(),
            weights: Weights::default(),
        }
    }

    /// Gets the line table.
    pub fn lines(&self) -> &'static [Line]
    {
        self.lines
    }

    /// Pairs a line table with weights, as long as every line at its best tier still sums below `WIN`.
    pub fn new(lines: &'static [Line], weights: Weights) -> Result<EvalConfig>
    {
        let ceiling = (lines.len() as Score).checked_mul(weights.max());
        if ceiling.map_or(true, |c| c >= WIN)
        {
            let err_msg = format!("{} lines weighted up to {} could reach the winning score {}.", lines.len(), weights.max(), WIN);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(EvalConfig { lines, weights })
    }

    /// Gets the weights.
    pub fn weights(&self) -> Weights
    {
        self.weights
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Counts marks along every winning line.
///
/// Lines holding marks from both players are dead and score nothing. Otherwise a line is worth its weight tier,
/// positive for the maximizer and negative for the minimizer. A completed line overrides everything else.
pub struct LineHeuristic
{
    config: EvalConfig,
}

impl LineHeuristic
{
    /// Gets the configuration of this heuristic.
    pub fn config(&self) -> &EvalConfig
    {
        &self.config
    }

    pub fn new(config: EvalConfig) -> Self
    {
        LineHeuristic { config }
    }
}

impl<P: Position> Heuristic<P> for LineHeuristic
{
    fn evaluate(&self, position: &P, maximizer: Player) -> Score
    {
        let minimizer = maximizer.flip();
        let (mut score, mut max_won, mut min_won) = (0, false, false);

        for line in self.config.lines
        {
            let (cx, co) = line.iter().fold((0, 0), |(cx, co), coord| {
                let cell = position.cell_at(*coord);
                (cx + cell.is(maximizer) as usize, co + cell.is(minimizer) as usize)
            });

            match (cx, co)
            {
                | (LINE_LENGTH, 0) => max_won = true,
                | (0, LINE_LENGTH) => min_won = true,
                | (n, 0) => score += self.config.weights.tier(n),
                | (0, n) => score -= self.config.weights.tier(n),
                | _ =>
                {}
            }
        }

        match (max_won, min_won)
        {
            | (true, true) => panic!("both {} and {} have completed a line", maximizer, minimizer),
            | (true, false) => WIN,
            | (false, true) => -WIN,
            | (false, false) => score,
        }
    }
}
