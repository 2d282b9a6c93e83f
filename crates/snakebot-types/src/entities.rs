//! Entities carried in a tick snapshot: items, snakes, chests, keys and the
//! shrinking safe-zone schedule.

use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, Position, Rect};

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Item value for a growth bean.
pub const GROWTH_BEAN_VALUE: i32 = -1;
/// Item value for a trap.
pub const TRAP_VALUE: i32 = -2;
/// Item value for a key lying on the ground.
pub const KEY_VALUE: i32 = -3;
/// Item value for a wall.
pub const WALL_VALUE: i32 = -4;
/// Item value for a treasure chest.
pub const CHEST_VALUE: i32 = -5;

/// Decoded meaning of an item's value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Ordinary food worth the given score.
    Food(u32),
    /// Grows the snake without scoring.
    GrowthBean,
    /// Hazard with a negative effect on contact.
    Trap,
    /// A key on the ground.
    Key,
    /// Impassable wall.
    Wall,
    /// A treasure chest, opened with a key.
    Chest,
    /// A value the agent does not recognise.
    Unknown(i32),
}

/// An item occupying one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Cell the item occupies.
    pub position: Position,
    /// Raw type/score encoding; see [`ItemKind`].
    pub value: i32,
    /// Remaining ticks before the item disappears (extended protocol only,
    /// `-1` when the item never expires).
    pub lifetime: Option<i32>,
}

impl Item {
    /// Decode the value field.
    pub const fn kind(&self) -> ItemKind {
        match self.value {
            v if v > 0 => ItemKind::Food(v.unsigned_abs()),
            GROWTH_BEAN_VALUE => ItemKind::GrowthBean,
            TRAP_VALUE => ItemKind::Trap,
            KEY_VALUE => ItemKind::Key,
            WALL_VALUE => ItemKind::Wall,
            CHEST_VALUE => ItemKind::Chest,
            other => ItemKind::Unknown(other),
        }
    }

    /// Whether the item is a wall.
    pub const fn is_wall(&self) -> bool {
        self.value == WALL_VALUE
    }

    /// Whether the item is a trap.
    pub const fn is_trap(&self) -> bool {
        self.value == TRAP_VALUE
    }

    /// Whether the item is food or a growth bean.
    pub const fn is_edible(&self) -> bool {
        self.value > 0 || self.value == GROWTH_BEAN_VALUE
    }
}

// ---------------------------------------------------------------------------
// Snakes
// ---------------------------------------------------------------------------

/// One snake as reported in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Player identity as assigned by the match engine.
    pub id: i64,
    /// Declared length; equals `body.len()` for decoded snapshots.
    pub length: u32,
    /// Current score.
    pub score: i32,
    /// Current heading.
    pub direction: Direction,
    /// Ticks until the shield can be activated again.
    pub shield_cooldown: i32,
    /// Ticks of shield protection remaining.
    pub shield_duration: i32,
    /// Body cells, head first.
    pub body: Vec<Position>,
    /// Whether the snake carries a key (extended protocol only).
    pub has_key: Option<bool>,
}

impl Snake {
    /// The head cell, or `None` when the body is empty.
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    /// Whether a shield is currently active. Recorded only; the match engine
    /// applies the immunity.
    pub const fn has_shield(&self) -> bool {
        self.shield_duration > 0
    }

    /// Whether the shield action is available: off cooldown and the score
    /// covers the activation threshold.
    pub const fn can_use_shield(&self, score_threshold: i32) -> bool {
        self.shield_cooldown == 0 && self.score >= score_threshold
    }
}

// ---------------------------------------------------------------------------
// Chests and keys
// ---------------------------------------------------------------------------

/// An unopened treasure chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chest {
    /// Cell the chest occupies.
    pub position: Position,
    /// Score awarded when opened.
    pub score: i32,
}

/// A key, either on the ground or held by a snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Ground cell, or the holder's head when held.
    pub position: Position,
    /// Raw holder field; zero or negative means unheld.
    pub holder: i64,
    /// Ticks the holder has left before the key is dropped.
    pub remaining_time: i32,
}

impl Key {
    /// The id of the snake holding this key, if any.
    pub const fn holder(&self) -> Option<i64> {
        if self.holder > 0 { Some(self.holder) } else { None }
    }
}

// ---------------------------------------------------------------------------
// Safe zone
// ---------------------------------------------------------------------------

/// A scheduled shrink of the safe zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShrinkEvent {
    /// Tick at which the shrink starts, `None` when nothing is scheduled.
    pub tick: Option<i32>,
    /// Bounds after the shrink.
    pub bounds: Rect,
}

/// The playable area and its upcoming shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafeZoneSchedule {
    /// Bounds in force this tick.
    pub current: Rect,
    /// The next shrink.
    pub next: ShrinkEvent,
    /// The final shrink.
    pub last: ShrinkEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: i32) -> Item {
        Item {
            position: Position::new(1, 1),
            value,
            lifetime: None,
        }
    }

    fn snake(score: i32, cooldown: i32) -> Snake {
        Snake {
            id: 7,
            length: 1,
            score,
            direction: Direction::Right,
            shield_cooldown: cooldown,
            shield_duration: 0,
            body: vec![Position::new(3, 3)],
            has_key: None,
        }
    }

    #[test]
    fn item_kinds_decode() {
        assert_eq!(item(5).kind(), ItemKind::Food(5));
        assert_eq!(item(-1).kind(), ItemKind::GrowthBean);
        assert_eq!(item(-2).kind(), ItemKind::Trap);
        assert_eq!(item(-3).kind(), ItemKind::Key);
        assert_eq!(item(-4).kind(), ItemKind::Wall);
        assert_eq!(item(-5).kind(), ItemKind::Chest);
        assert_eq!(item(0).kind(), ItemKind::Unknown(0));
        assert!(item(-4).is_wall());
        assert!(item(-2).is_trap());
        assert!(item(-1).is_edible());
        assert!(!item(-2).is_edible());
    }

    #[test]
    fn shield_needs_cooldown_and_score() {
        assert!(snake(20, 0).can_use_shield(20));
        assert!(snake(25, 0).can_use_shield(20));
        assert!(!snake(19, 0).can_use_shield(20));
        assert!(!snake(25, 3).can_use_shield(20));
    }

    #[test]
    fn head_of_empty_body_is_none() {
        let mut s = snake(0, 0);
        assert_eq!(s.head(), Some(Position::new(3, 3)));
        s.body.clear();
        assert_eq!(s.head(), None);
    }

    #[test]
    fn key_holder_sentinels() {
        let mut key = Key {
            position: Position::new(0, 0),
            holder: -1,
            remaining_time: 0,
        };
        assert_eq!(key.holder(), None);
        key.holder = 0;
        assert_eq!(key.holder(), None);
        key.holder = 2023;
        assert_eq!(key.holder(), Some(2023));
    }
}
