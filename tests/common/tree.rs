use tictacmind::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A hand-built game tree with scores at its leaves.
pub enum Tree
{
    Leaf(Player, Score),
    Node(Player, Vec<Tree>),
}

impl Tree
{
    /// Builds a two-level tree: `player` picks a branch, then the opponent picks a leaf.
    pub fn two_ply(player: Player, branches: &[&[Score]]) -> Tree
    {
        let opponent = player.flip();
        let children = branches
            .iter()
            .map(|leaves| Tree::Node(opponent, leaves.iter().map(|s| Tree::Leaf(player, *s)).collect()))
            .collect();
        Tree::Node(player, children)
    }
}

impl Position for Tree
{
    type Successors = std::vec::IntoIter<Tree>;

    fn cell_at(&self, _coord: Coord) -> Cell
    {
        Cell::Empty
    }

    fn successors(&self) -> Self::Successors
    {
        match self
        {
            | Tree::Leaf(..) => Vec::new().into_iter(),
            | Tree::Node(_, children) => children.clone().into_iter(),
        }
    }

    fn to_move(&self) -> Player
    {
        match self
        {
            | Tree::Leaf(player, _) | Tree::Node(player, _) => *player,
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Reads leaf scores straight off the tree, from the first player's point of view.
pub struct LeafScore;

impl Heuristic<Tree> for LeafScore
{
    fn evaluate(&self, position: &Tree, _maximizer: Player) -> Score
    {
        match position
        {
            | Tree::Leaf(_, score) => *score,
            | Tree::Node(..) => 0,
        }
    }
}

#[derive(Debug, Default)]
/// Records the order in which leaves were scored.
pub struct LeafLog
{
    pub scores: Vec<Score>,
}

impl NodeObserver for LeafLog
{
    fn leaf(&mut self, _depth: Depth, score: Score)
    {
        self.scores.push(score);
    }
}
