use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Whether the searcher may skip siblings that cannot change the result.
pub enum Pruning
{
    #[default]
    Enabled,
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The window and remaining depth at a node.
pub struct SearchData
{
    pub alpha: Score,
    pub beta:  Score,
    pub depth: Depth,
}

impl SearchData
{
    /// The unbounded window at the given depth.
    pub fn full(depth: Depth) -> Self
    {
        SearchData {
            alpha: -INF,
            beta: INF,
            depth,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The successor picked at the root, with its position in generation order and its score.
pub struct Choice<P>
{
    pub position: P,
    pub index:    usize,
    pub score:    Score,
}

#[derive(Clone, Debug)]
/// A fixed-depth minimax searcher with alpha-beta pruning.
pub struct Searcher<H>
{
    heuristic: H,
    depth:     Depth,
    pruning:   Pruning,
}

impl<H> Searcher<H>
{
    /// Gets the depth of the search, counting the root's own move.
    pub fn depth(&self) -> Depth
    {
        self.depth
    }

    /// Gets the heuristic used at the horizon.
    pub fn heuristic(&self) -> &H
    {
        &self.heuristic
    }

    /// Creates a pruning searcher.
    pub fn new(heuristic: H, depth: Depth) -> Self
    {
        Searcher {
            heuristic,
            depth,
            pruning: Pruning::Enabled,
        }
    }

    pub fn with_pruning(self, pruning: Pruning) -> Self
    {
        Searcher { pruning, ..self }
    }
}

impl<H> Searcher<H>
{
    /// Returns the best successor for the player to move, or `None` when there is no legal move.
    pub fn play<P>(&self, position: &P, deadline: &Deadline) -> Option<P>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let mut counter = NodeCounter::default();
        let choice = self.choose(position, deadline, &mut counter);

        let elapsed = deadline.elapsed();
        match &choice
        {
            | Some(choice) => log::debug!("chose successor {: >2}: scored {: >8}", choice.index, choice.score),
            | None => log::debug!("no legal moves; returning the null move"),
        }
        log::debug!("took {: >3.3}s at depth {}", elapsed.as_secs_f64(), self.depth);
        log::debug!(
            "visited {:09}  stems, {:09} leaves, {} cutoffs ({: >8} N/s)",
            counter.stems,
            counter.leaves,
            counter.cutoffs,
            (counter.nodes() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)).floor() as u64
        );

        choice.map(|c| c.position)
    }

    /// Searches every successor of the root with a full window and keeps the first one with the highest score.
    ///
    /// The root always expands its own move, so a depth of zero searches exactly like a depth of one.
    pub fn choose<P, O>(&self, position: &P, deadline: &Deadline, observer: &mut O) -> Option<Choice<P>>
    where
        P: Position,
        H: Heuristic<P>,
        O: NodeObserver,
    {
        let maximizer = position.to_move();
        let data = SearchData::full(self.depth - 1);

        let mut best: Option<Choice<P>> = None;
        for (index, successor) in position.successors().enumerate()
        {
            let score = self.search(&successor, maximizer.flip(), maximizer, data, observer);
            log::trace!("root successor {: >2} scored {: >8}", index, score);

            if best.as_ref().map_or(true, |b| score > b.score)
            {
                best = Some(Choice {
                    position: successor,
                    index,
                    score,
                });
            }
        }

        if let Some(overrun) = deadline.overrun()
        {
            log::warn!("search at depth {} overran its deadline by {:?}", self.depth, overrun);
        }

        best
    }

    /// Performs minimax search with alpha-beta pruning below `node`, where `player` is to move.
    ///
    /// Positions at the horizon or without successors are scored by the heuristic.
    pub fn search<P, O>(&self, node: &P, player: Player, maximizer: Player, data: SearchData, observer: &mut O) -> Score
    where
        P: Position,
        H: Heuristic<P>,
        O: NodeObserver,
    {
        assert_eq!(player, node.to_move(), "searched with the wrong player to move");

        let mut children = node.successors().peekable();
        if data.depth == Depth::NIL || children.peek().is_none()
        {
            let score = self.heuristic.evaluate(node, maximizer);
            observer.leaf(data.depth, score);
            return score;
        }

        observer.stem(data.depth);

        let SearchData { mut alpha, mut beta, depth } = data;
        let next = depth - 1;

        if player == maximizer
        {
            let mut best = -INF;
            for child in children
            {
                let score = self.search(&child, player.flip(), maximizer, SearchData { alpha, beta, depth: next }, observer);
                best = best.max(score);
                alpha = alpha.max(best);

                if self.pruning == Pruning::Enabled && beta <= alpha
                {
                    observer.cutoff(depth);
                    break;
                }
            }
            best
        }
        else
        {
            let mut best = INF;
            for child in children
            {
                let score = self.search(&child, player.flip(), maximizer, SearchData { alpha, beta, depth: next }, observer);
                best = best.min(score);
                beta = beta.min(best);

                if self.pruning == Pruning::Enabled && beta <= alpha
                {
                    observer.cutoff(depth);
                    break;
                }
            }
            best
        }
    }
}
