//! Shared type definitions for the snakebot decision agent.
//!
//! Every other crate in the workspace speaks in these types: the protocol
//! crate decodes into a [`Snapshot`], the world crate answers queries over
//! it, and the agent emits an [`Action`].
//!
//! # Modules
//!
//! - [`geometry`] -- Positions, directions, wire actions and rectangles
//! - [`entities`] -- Items, snakes, chests, keys and the safe-zone schedule
//! - [`snapshot`] -- The aggregate per-tick snapshot

pub mod entities;
pub mod geometry;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use entities::{
    CHEST_VALUE, Chest, GROWTH_BEAN_VALUE, Item, ItemKind, KEY_VALUE, Key, SafeZoneSchedule,
    ShrinkEvent, Snake, TRAP_VALUE, WALL_VALUE,
};
pub use geometry::{Action, Direction, Position, Rect};
pub use snapshot::Snapshot;
