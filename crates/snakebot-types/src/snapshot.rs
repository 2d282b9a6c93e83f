//! The decoded per-tick world snapshot.

use serde::{Deserialize, Serialize};

use crate::entities::{Chest, Item, Key, SafeZoneSchedule, Snake};

/// Everything the match engine reports for one tick.
///
/// Fields that only the extended protocol carries are empty or `None` when
/// decoded from the classic protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ticks left in the match, as reported by the engine.
    pub remaining_ticks: i32,
    /// Food, beans, traps, walls and any other cell items.
    pub items: Vec<Item>,
    /// Every live snake, in protocol order.
    pub snakes: Vec<Snake>,
    /// Unopened chests.
    pub chests: Vec<Chest>,
    /// Keys on the ground and in transit.
    pub keys: Vec<Key>,
    /// Safe-zone bounds and shrink schedule.
    pub safe_zone: Option<SafeZoneSchedule>,
    /// Index into `snakes` of the agent's own snake, when it is alive.
    pub self_index: Option<usize>,
}

impl Snapshot {
    /// The agent's own snake, if it appeared in the snapshot.
    pub fn my_snake(&self) -> Option<&Snake> {
        self.self_index.and_then(|i| self.snakes.get(i))
    }
}
