//! Caller-owned target storage.
//!
//! Navigators never own targets. They keep `TargetId` handles into an
//! `Archipelago` and borrow it for each operation, so a raid performed through
//! one navigator is visible to every other holder of the same handle.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::island::Target;

/// Handle to a target stored in an `Archipelago`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub usize);

impl TargetId {
    /// Position of the target inside its archipelago.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An append-only arena of targets addressed by `TargetId`.
///
/// Handles stay valid for the lifetime of the archipelago since targets are
/// never removed; a depleted target simply has no resource left.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Archipelago {
    targets: Vec<Target>,
}

impl Archipelago {
    /// Creates an empty archipelago.
    pub fn new() -> Self {
        Archipelago {
            targets: Vec::new(),
        }
    }

    /// Adds a target and returns its handle.
    pub fn push(&mut self, target: Target) -> TargetId {
        let id = TargetId(self.targets.len());
        self.targets.push(target);
        id
    }

    /// Adds several targets, returning their handles in order.
    pub fn extend<I>(&mut self, targets: I) -> Vec<TargetId>
    where
        I: IntoIterator<Item = Target>,
    {
        targets.into_iter().map(|t| self.push(t)).collect()
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(id.0)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterates over every target with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &Target)> {
        self.targets.iter().enumerate().map(|(i, t)| (TargetId(i), t))
    }

    /// Handles of every stored target, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = TargetId> {
        (0..self.targets.len()).map(TargetId)
    }

    /// Sum of remaining resource over all targets.
    pub fn total_resource(&self) -> f64 {
        self.targets.iter().map(|t| t.resource).sum()
    }

    /// Sum of remaining defense cost over all targets.
    pub fn total_defense(&self) -> u64 {
        self.targets.iter().map(|t| t.defense_cost).sum()
    }
}

impl FromIterator<Target> for Archipelago {
    fn from_iter<I: IntoIterator<Item = Target>>(iter: I) -> Self {
        Archipelago {
            targets: iter.into_iter().collect(),
        }
    }
}

impl Index<TargetId> for Archipelago {
    type Output = Target;

    fn index(&self, id: TargetId) -> &Target {
        &self.targets[id.0]
    }
}

impl IndexMut<TargetId> for Archipelago {
    fn index_mut(&mut self, id: TargetId) -> &mut Target {
        &mut self.targets[id.0]
    }
}
