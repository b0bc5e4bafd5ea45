use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
/// The point in time by which a move should be chosen.
///
/// The searcher never interrupts itself; it only reports when a search ran past its deadline.
pub struct Deadline
{
    start:  Instant,
    budget: Option<Duration>,
}

impl Default for Deadline
{
    fn default() -> Self
    {
        Deadline::none()
    }
}

impl Deadline
{
    /// A deadline the given duration from now.
    pub fn after(budget: Duration) -> Deadline
    {
        Deadline {
            start:  Instant::now(),
            budget: Some(budget),
        }
    }

    /// Time passed since the deadline was set.
    pub fn elapsed(&self) -> Duration
    {
        self.start.elapsed()
    }

    /// Whether the budget is spent.
    pub fn expired(&self) -> bool
    {
        self.overrun().is_some()
    }

    /// A deadline that never expires.
    pub fn none() -> Deadline
    {
        Deadline {
            start:  Instant::now(),
            budget: None,
        }
    }

    /// How far past the deadline we are, if at all.
    pub fn overrun(&self) -> Option<Duration>
    {
        let budget = self.budget?;
        self.elapsed().checked_sub(budget).filter(|d| !d.is_zero())
    }

    /// Time left before the deadline, or `None` for an unbounded deadline.
    pub fn remaining(&self) -> Option<Duration>
    {
        self.budget.map(|budget| budget.saturating_sub(self.elapsed()))
    }
}
