//! A single yield-bearing target.
//!
//! A target holds a depletable resource (money) guarded by a depletable
//! defense cost (marines). Sending crew against the defense captures a
//! proportional share of the resource.

use serde::{Deserialize, Serialize};

/// A target that crew can be sent against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    /// Remaining resource. Never negative.
    pub resource: f64,
    /// Crew needed to capture the whole remaining resource.
    pub defense_cost: u64,
}

impl Target {
    /// Creates a target with the given name, resource and defense cost.
    pub fn new(name: impl Into<String>, resource: f64, defense_cost: u64) -> Self {
        Target {
            name: name.into(),
            resource,
            defense_cost,
        }
    }

    /// Defense cost per unit of resource. Lower is better.
    ///
    /// A target with no resource left sorts last regardless of its defense,
    /// and an undefended target with resource sorts first.
    pub fn ratio(&self) -> f64 {
        if self.resource <= 0.0 {
            f64::INFINITY
        } else {
            self.defense_cost as f64 / self.resource
        }
    }

    /// Resource captured by sending `sent` crew, without mutating the target.
    ///
    /// An undefended target gives up everything it has.
    pub fn plunder(&self, sent: u64) -> f64 {
        if self.defense_cost == 0 {
            return self.resource;
        }
        let share = self.resource * sent as f64 / self.defense_cost as f64;
        share.min(self.resource)
    }

    /// Sends `sent` crew against the target and depletes it.
    ///
    /// Returns the resource captured. Both fields are clamped at zero.
    pub fn raid(&mut self, sent: u64) -> f64 {
        let captured = self.plunder(sent);
        self.resource = (self.resource - captured).max(0.0);
        self.defense_cost = self.defense_cost.saturating_sub(sent);
        captured
    }

    /// Overwrites both depletable fields.
    pub fn set(&mut self, resource: f64, defense_cost: u64) {
        self.resource = resource;
        self.defense_cost = defense_cost;
    }

    /// Returns true once nothing is left to capture.
    pub fn is_depleted(&self) -> bool {
        self.resource <= 0.0
    }
}
