//! Per-unit greedy dispatch.
//!
//! Each round every crew-unit gets the same fresh budget and, one after the
//! other, raids the target with the highest score. A score counts the resource
//! captured plus `crew_weight` points per crew member kept home, so a unit
//! stays idle when no target beats sending nobody at all.
//!
//! Scores are recomputed from the live targets at the start of every round.
//! Depletion carries over between rounds only through the targets themselves.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::collections::{HeapError, MaxHeap};
use crate::config::NavigatorConfig;
use crate::target::{Archipelago, Target, TargetId};

/// Points awarded per unused crew member unless configured otherwise.
pub const DEFAULT_CREW_WEIGHT: f64 = 2.0;

/// What one crew-unit did during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sortie {
    /// The raided target, or `None` if the unit stayed home.
    pub target: Option<TargetId>,
    pub crew: u64,
}

impl Sortie {
    /// A unit that sent nobody anywhere.
    pub const fn idle() -> Self {
        Sortie {
            target: None,
            crew: 0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }
}

/// Heap entry. Orders by score, then by registration slot, so among equal
/// scores the target registered later with the navigator is drawn first.
#[derive(Debug, Clone, Copy)]
struct Scored {
    score: f64,
    slot: usize,
    id: TargetId,
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

/// Dispatches a fixed number of crew-units per round.
#[derive(Debug, Clone)]
pub struct DispatchNavigator {
    unit_count: usize,
    crew_weight: f64,
    targets: Vec<TargetId>,
}

impl DispatchNavigator {
    /// Creates a navigator that sends `unit_count` units per round.
    pub fn new(unit_count: usize) -> Self {
        DispatchNavigator {
            unit_count,
            crew_weight: DEFAULT_CREW_WEIGHT,
            targets: Vec::new(),
        }
    }

    /// Creates a navigator from the configured unit count and crew weight.
    pub fn from_config(config: &NavigatorConfig) -> Self {
        DispatchNavigator {
            unit_count: config.unit_count,
            crew_weight: config.crew_weight,
            targets: Vec::new(),
        }
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Handles of the targets this navigator considers.
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    /// Registers more targets. They take part from the next round on.
    pub fn add_targets<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = TargetId>,
    {
        let before = self.targets.len();
        self.targets.extend(ids);
        debug!(
            added = self.targets.len() - before,
            total = self.targets.len(),
            "dispatch targets added"
        );
    }

    /// Value of sending one unit of `crew` against `target`.
    ///
    /// The unit sends at most the target's defense cost; the rest stays home
    /// and is worth `crew_weight` each.
    pub fn score(&self, crew: u64, target: &Target) -> f64 {
        let sent = target.defense_cost.min(crew);
        let kept = crew - sent;
        self.crew_weight * kept as f64 + target.plunder(sent)
    }

    /// Score of a unit that sends nobody. Targets scoring at or below it are
    /// skipped.
    pub fn skip_threshold(&self, crew: u64) -> f64 {
        self.crew_weight * crew as f64
    }

    /// Runs one round with `crew` per unit and returns one sortie per unit.
    ///
    /// A raided target that still has resource is rescored and may be drawn
    /// again by a later unit in the same round. A target drawn at or below the
    /// skip threshold is dropped for the rest of the round, and so is one the
    /// unit would reach with no crew at all.
    pub fn run_round(&self, sea: &mut Archipelago, crew: u64) -> Vec<Sortie> {
        let mut heap = MaxHeap::heapify(self.targets.iter().enumerate().map(|(slot, &id)| {
            Scored {
                score: self.score(crew, &sea[id]),
                slot,
                id,
            }
        }));
        let threshold = self.skip_threshold(crew);
        let mut sorties = Vec::with_capacity(self.unit_count);

        for unit in 0..self.unit_count {
            let best = match heap.extract_max() {
                Ok(best) => best,
                Err(HeapError::Empty) => {
                    sorties.push(Sortie::idle());
                    continue;
                }
            };
            if best.score <= threshold {
                trace!(unit, id = best.id.index(), score = best.score, "unit skips");
                sorties.push(Sortie::idle());
                continue;
            }

            let target = &mut sea[best.id];
            let sent = target.defense_cost.min(crew);
            if sent == 0 {
                trace!(unit, id = best.id.index(), "nothing to send");
                sorties.push(Sortie::idle());
                continue;
            }
            let captured = target.raid(sent);
            trace!(unit, id = best.id.index(), score = best.score, sent, captured, "unit raids");
            sorties.push(Sortie {
                target: Some(best.id),
                crew: sent,
            });

            if !target.is_depleted() {
                let score = self.score(crew, target);
                heap.insert(Scored { score, ..best });
            }
        }

        debug!(
            units = self.unit_count,
            raids = sorties.iter().filter(|s| !s.is_idle()).count(),
            crew,
            "dispatch round finished"
        );
        sorties
    }

    /// Runs `days` consecutive rounds with the same crew per unit.
    pub fn run_rounds(&self, sea: &mut Archipelago, crew: u64, days: usize) -> Vec<Vec<Sortie>> {
        (0..days).map(|_| self.run_round(sea, crew)).collect()
    }
}
