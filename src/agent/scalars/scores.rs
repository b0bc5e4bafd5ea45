/// A heuristic or terminal score. Larger favours the maximizer.
pub type Score = i64;

pub mod consts
{
    use super::Score;

    /// The score of a completed line; no sum of unfinished lines can reach it.
    pub const WIN: Score = 1_000_000;

    /// The bound of the search window, strictly beyond any score a position can have.
    pub const INF: Score = 1_000 * WIN;
}
