//! Ratio-ordered batch allocation.
//!
//! Targets are indexed once by `defense_cost / resource`. A single budget is
//! spent greedily from the cheapest ratio upward, and a whole batch of budgets
//! is answered with one sweep over the index after sorting the budgets.
//!
//! The index is a snapshot: raiding or updating a target afterwards does not
//! move it. Call [`BatchNavigator::reindex`] to rebuild from current values.

use tracing::{debug, trace};

use crate::collections::{merge_sort_by_key, OrderedIndex};
use crate::config::NavigatorConfig;
use crate::target::{Archipelago, Target, TargetId};

/// Crew sent to one target by a batch allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub target: TargetId,
    pub crew: u64,
}

/// Spends crew budgets across targets in ascending ratio order.
#[derive(Debug, Clone)]
pub struct BatchNavigator {
    index: OrderedIndex<TargetId>,
    crew: u64,
}

impl BatchNavigator {
    /// Indexes every target in `sea` with `crew` as the default budget.
    pub fn new(sea: &Archipelago, crew: u64) -> Self {
        let mut nav = BatchNavigator {
            index: OrderedIndex::with_capacity(sea.len()),
            crew,
        };
        nav.build(sea);
        debug!(targets = sea.len(), crew, "batch navigator indexed");
        nav
    }

    /// Builds a navigator using the configured default budget.
    pub fn from_config(sea: &Archipelago, config: &NavigatorConfig) -> Self {
        Self::new(sea, config.default_crew)
    }

    /// The default crew budget.
    pub fn crew(&self) -> u64 {
        self.crew
    }

    pub fn set_crew(&mut self, crew: u64) {
        self.crew = crew;
    }

    /// Number of indexed targets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Indexed targets in traversal order.
    pub fn ranking(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.index.in_order().map(|(_, id)| *id)
    }

    /// Splits the default budget across targets, cheapest ratio first.
    ///
    /// Each target receives at most its current defense cost. Stops when the
    /// budget runs out or every target has been visited. Targets are not
    /// modified.
    pub fn allocate_once(&self, sea: &Archipelago) -> Vec<Assignment> {
        let mut remaining = self.crew;
        let mut plan = Vec::new();
        let mut stops = self.ranking();
        while remaining > 0 {
            let Some(id) = stops.next() else { break };
            let sent = sea[id].defense_cost.min(remaining);
            plan.push(Assignment { target: id, crew: sent });
            remaining -= sent;
        }
        plan
    }

    /// Resource captured by spending `crew` greedily in ratio order.
    ///
    /// Walks the index from the start on every call, so answering many
    /// budgets this way costs O(targets × budgets). Prefer
    /// [`BatchNavigator::allocate_for_many`] for batches.
    pub fn plunder_for_crew(&self, sea: &Archipelago, crew: u64) -> f64 {
        let mut remaining = crew;
        let mut total = 0.0;
        let mut stops = self.ranking();
        while remaining > 0 {
            let Some(id) = stops.next() else { break };
            let target = &sea[id];
            let sent = target.defense_cost.min(remaining);
            total += target.plunder(sent);
            remaining -= sent;
        }
        total
    }

    /// Resource captured for each budget in `crew_sizes`, in the same order.
    ///
    /// Budgets are sorted ascending with a stable sort and answered in one
    /// sweep over the index: each budget continues from where the previous
    /// smaller one stopped and only spends its extra crew. Targets are read,
    /// never modified, so every budget sees the same starting values.
    pub fn allocate_for_many(&self, sea: &Archipelago, crew_sizes: &[u64]) -> Vec<f64> {
        let queries: Vec<(usize, u64)> = crew_sizes.iter().copied().enumerate().collect();
        let queries = merge_sort_by_key(&queries, |&(_, crew)| crew);

        let mut stops = self.ranking().map(|id| &sea[id]);
        let mut cursor: Option<Cursor<'_>> = stops.next().map(Cursor::new);
        let mut visited = usize::from(cursor.is_some());
        let mut total = 0.0;
        let mut spent = 0;
        let mut plunder = vec![0.0; crew_sizes.len()];

        for (slot, crew) in queries {
            let mut extra = crew - spent;
            spent = crew;
            while extra > 0 {
                let Some(at) = cursor.as_mut() else { break };
                let sent = at.remaining.min(extra);
                total += at.target.plunder(sent);
                extra -= sent;
                at.remaining -= sent;
                if at.remaining == 0 {
                    cursor = stops.next().map(Cursor::new);
                    visited += usize::from(cursor.is_some());
                }
            }
            plunder[slot] = total;
        }

        debug!(queries = crew_sizes.len(), visited, "batch sweep finished");
        plunder
    }

    /// Overwrites a target's resource and defense cost.
    ///
    /// The index keeps the target at its old position.
    pub fn update_target(
        &self,
        sea: &mut Archipelago,
        id: TargetId,
        new_resource: f64,
        new_defense_cost: u64,
    ) {
        trace!(id = id.index(), new_resource, new_defense_cost, "target updated");
        sea[id].set(new_resource, new_defense_cost);
    }

    /// Rebuilds the index from the current state of `sea`.
    ///
    /// Targets added to `sea` since construction are included.
    pub fn reindex(&mut self, sea: &Archipelago) {
        self.index.clear();
        self.build(sea);
        debug!(targets = sea.len(), "batch navigator reindexed");
    }

    fn build(&mut self, sea: &Archipelago) {
        for (id, target) in sea.iter() {
            self.index.insert(target.ratio(), id);
        }
    }
}

/// Position of the sweep: the target being spent on and the crew it can
/// still absorb.
struct Cursor<'a> {
    target: &'a Target,
    remaining: u64,
}

impl<'a> Cursor<'a> {
    fn new(target: &'a Target) -> Self {
        Cursor {
            target,
            remaining: target.defense_cost,
        }
    }
}
