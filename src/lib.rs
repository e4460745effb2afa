//! Plunder: greedy crew allocation across depletable targets.
//!
//! Exposes the target model, the ordered containers the allocators are built
//! on, and the two navigators: a ratio-ordered batch planner and a per-unit
//! heap dispatcher.

pub mod collections;
pub mod config;
pub mod navigate;
pub mod target;

pub use config::{load_config, load_config_from_str, ConfigError, NavigatorConfig};
pub use navigate::{Assignment, BatchNavigator, DispatchNavigator, Sortie};
pub use target::{Archipelago, Target, TargetId};
