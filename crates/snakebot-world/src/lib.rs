//! World state and move safety for the snakebot decision agent.
//!
//! # Modules
//!
//! - [`bounds`] -- [`BoardBounds`], the configured grid size
//! - [`error`] -- [`WorldError`]
//! - [`safety`] -- Safe-direction evaluation around a snake's head
//! - [`world_state`] -- [`WorldState`] occupancy queries over one snapshot

pub mod bounds;
pub mod error;
pub mod safety;
pub mod world_state;

pub use bounds::BoardBounds;
pub use error::WorldError;
pub use safety::{SafetyReport, evaluate, safe_directions};
pub use world_state::WorldState;
