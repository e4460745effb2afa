//! Crew allocation strategies.
//!
//! The batch navigator plans against a ratio snapshot without touching
//! targets; the dispatch navigator raids targets unit by unit and depletes them.

pub mod batch;
pub mod dispatch;

pub use batch::{Assignment, BatchNavigator};
pub use dispatch::{DispatchNavigator, Sortie, DEFAULT_CREW_WEIGHT};
