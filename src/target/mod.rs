//! Target model.
//!
//! Contains the depletable target type and the arena that owns every target
//! a navigator refers to by handle.

pub mod archipelago;
pub mod island;

pub use archipelago::{Archipelago, TargetId};
pub use island::Target;
