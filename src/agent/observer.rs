use crate::prelude::*;

/// Hooks invoked while the searcher walks the tree.
///
/// Every method defaults to doing nothing, and `()` is the observer that ignores everything.
pub trait NodeObserver
{
    /// An interior node is about to expand its children.
    fn stem(&mut self, _depth: Depth) {}

    /// A node was scored by the heuristic, either at the horizon or because it has no successors.
    fn leaf(&mut self, _depth: Depth, _score: Score) {}

    /// The remaining siblings at a node were skipped.
    fn cutoff(&mut self, _depth: Depth) {}
}

impl NodeObserver for () {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counts the nodes of a search.
pub struct NodeCounter
{
    pub stems:   u64,
    pub leaves:  u64,
    pub cutoffs: u64,
}

impl NodeCounter
{
    /// Every node visited.
    pub fn nodes(&self) -> u64
    {
        self.stems + self.leaves
    }
}

impl NodeObserver for NodeCounter
{
    fn stem(&mut self, _depth: Depth)
    {
        self.stems += 1;
    }

    fn leaf(&mut self, _depth: Depth, _score: Score)
    {
        self.leaves += 1;
    }

    fn cutoff(&mut self, _depth: Depth)
    {
        self.cutoffs += 1;
    }
}
