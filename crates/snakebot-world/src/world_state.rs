//! The read-only world model for one tick.
//!
//! [`WorldState`] wraps a decoded [`Snapshot`] together with the board size
//! and answers the occupancy questions the decision policy asks. It is built
//! once per tick and discarded after the action is emitted; entity counts are
//! small, so every query is a linear scan.

use snakebot_types::{Chest, Item, Key, Position, SafeZoneSchedule, Snake, Snapshot};

use crate::bounds::BoardBounds;
use crate::error::WorldError;

/// Immutable per-tick world state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    snapshot: Snapshot,
    bounds: BoardBounds,
}

impl WorldState {
    /// Wrap a decoded snapshot.
    pub const fn new(snapshot: Snapshot, bounds: BoardBounds) -> Self {
        Self { snapshot, bounds }
    }

    /// All items on the board.
    pub fn items(&self) -> &[Item] {
        &self.snapshot.items
    }

    /// Unopened chests (extended protocol).
    pub fn chests(&self) -> &[Chest] {
        &self.snapshot.chests
    }

    /// Keys (extended protocol).
    pub fn keys(&self) -> &[Key] {
        &self.snapshot.keys
    }

    /// The safe-zone schedule (extended protocol).
    pub const fn safe_zone(&self) -> Option<&SafeZoneSchedule> {
        self.snapshot.safe_zone.as_ref()
    }

    /// The agent's own snake, if it is alive this tick.
    pub fn my_snake(&self) -> Option<&Snake> {
        self.snapshot.my_snake()
    }

    /// The head of `snake`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyBody`] when the snake has no segments.
    pub fn head_of(snake: &Snake) -> Result<Position, WorldError> {
        snake
            .head()
            .ok_or(WorldError::EmptyBody { snake_id: snake.id })
    }

    // -----------------------------------------------------------------------
    // Occupancy
    // -----------------------------------------------------------------------

    /// The item occupying `pos`, if any.
    pub fn object_at(&self, pos: Position) -> Option<&Item> {
        self.snapshot.items.iter().find(|item| item.position == pos)
    }

    /// Whether any snake has a non-head segment at `pos`. The agent's own
    /// body counts.
    pub fn has_body_at(&self, pos: Position) -> bool {
        self.snapshot
            .snakes
            .iter()
            .any(|snake| snake.body.iter().skip(1).any(|&segment| segment == pos))
    }

    /// Whether any snake's head is at `pos`.
    pub fn has_head_at(&self, pos: Position) -> bool {
        self.snapshot
            .snakes
            .iter()
            .any(|snake| snake.head() == Some(pos))
    }

    /// Whether moving into `pos` is safe given this snapshot alone.
    ///
    /// A cell is unsafe when it is off the board, holds a wall, or holds a
    /// non-head body segment. Heads, traps and the safe zone are not
    /// considered; neither are other snakes' next moves.
    pub fn is_safe_position(&self, pos: Position) -> bool {
        if !self.bounds.contains(pos) {
            return false;
        }
        if self.object_at(pos).is_some_and(Item::is_wall) {
            return false;
        }
        !self.has_body_at(pos)
    }

    /// Whether `pos` lies in the current safe zone. Always true when the
    /// snapshot carries no schedule. Rows and columns are compared against
    /// the zone's own row and column bounds.
    pub fn in_safe_zone(&self, pos: Position) -> bool {
        self.safe_zone()
            .is_none_or(|zone| zone.current.contains(pos))
    }

    /// Heads of every snake other than the one with id `except`.
    pub fn other_heads(&self, except: i64) -> impl Iterator<Item = Position> + '_ {
        self.snapshot
            .snakes
            .iter()
            .filter(move |snake| snake.id != except)
            .filter_map(Snake::head)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use snakebot_protocol::{ProtocolVariant, decode_snapshot};
    use snakebot_types::{Direction, Rect, ShrinkEvent, WALL_VALUE};

    use super::*;

    fn snake(id: i64, body: &[(i32, i32)]) -> Snake {
        Snake {
            id,
            length: u32::try_from(body.len()).unwrap(),
            score: 0,
            direction: Direction::Left,
            shield_cooldown: 0,
            shield_duration: 0,
            body: body.iter().map(|&(row, col)| Position::new(row, col)).collect(),
            has_key: None,
        }
    }

    fn item(x: i32, y: i32, value: i32) -> Item {
        Item {
            position: Position::new(x, y),
            value,
            lifetime: None,
        }
    }

    fn world(items: Vec<Item>, snakes: Vec<Snake>) -> WorldState {
        WorldState::new(
            Snapshot {
                remaining_ticks: 50,
                items,
                snakes,
                self_index: Some(0),
                ..Snapshot::default()
            },
            BoardBounds::default(),
        )
    }

    // -----------------------------------------------------------------------
    // object_at / body / head
    // -----------------------------------------------------------------------

    #[test]
    fn object_at_finds_item() {
        let w = world(vec![item(1, 1, 5), item(2, 2, WALL_VALUE)], Vec::new());
        assert_eq!(w.object_at(Position::new(2, 2)).map(|i| i.value), Some(WALL_VALUE));
        assert!(w.object_at(Position::new(3, 3)).is_none());
    }

    #[test]
    fn body_excludes_heads() {
        let w = world(Vec::new(), vec![snake(1, &[(5, 5), (5, 6)]), snake(2, &[(9, 9), (9, 8)])]);
        assert!(!w.has_body_at(Position::new(5, 5)));
        assert!(w.has_body_at(Position::new(5, 6)));
        assert!(w.has_body_at(Position::new(9, 8)));
        assert!(w.has_head_at(Position::new(9, 9)));
        assert!(!w.has_head_at(Position::new(9, 8)));
    }

    #[test]
    fn empty_body_snake_is_harmless_to_queries() {
        let w = world(Vec::new(), vec![snake(1, &[])]);
        assert!(!w.has_head_at(Position::new(0, 0)));
        assert!(!w.has_body_at(Position::new(0, 0)));
        let me = w.my_snake().unwrap();
        assert_eq!(WorldState::head_of(me), Err(WorldError::EmptyBody { snake_id: 1 }));
    }

    // -----------------------------------------------------------------------
    // is_safe_position
    // -----------------------------------------------------------------------

    #[test]
    fn out_of_bounds_is_unsafe() {
        let w = world(Vec::new(), Vec::new());
        assert!(!w.is_safe_position(Position::new(-1, 0)));
        assert!(!w.is_safe_position(Position::new(0, -1)));
        assert!(!w.is_safe_position(Position::new(30, 0)));
        assert!(!w.is_safe_position(Position::new(0, 40)));
        assert!(w.is_safe_position(Position::new(29, 39)));
        assert!(w.is_safe_position(Position::new(5, 34)));
    }

    #[test]
    fn every_wall_is_unsafe() {
        let walls: Vec<Item> = (0..30).map(|row| item(row, (row * 7) % 40, WALL_VALUE)).collect();
        let w = world(walls.clone(), Vec::new());
        for wall in &walls {
            assert!(!w.is_safe_position(wall.position), "wall at {}", wall.position);
        }
    }

    #[test]
    fn every_non_head_segment_is_unsafe() {
        let mine = snake(1, &[(3, 3), (3, 4), (3, 5), (4, 5)]);
        let theirs = snake(2, &[(20, 20), (21, 20), (22, 20)]);
        let w = world(Vec::new(), vec![mine.clone(), theirs.clone()]);
        for s in [&mine, &theirs] {
            for segment in s.body.iter().skip(1) {
                assert!(!w.is_safe_position(*segment), "segment at {segment}");
            }
        }
        // Heads themselves are not excluded.
        assert!(w.is_safe_position(Position::new(20, 20)));
    }

    #[test]
    fn food_traps_and_beans_are_safe() {
        let w = world(vec![item(1, 1, 3), item(1, 2, -1), item(1, 3, -2)], Vec::new());
        assert!(w.is_safe_position(Position::new(1, 1)));
        assert!(w.is_safe_position(Position::new(1, 2)));
        assert!(w.is_safe_position(Position::new(1, 3)));
    }

    #[test]
    fn custom_bounds_are_respected() {
        // 8 columns by 5 rows.
        let w = WorldState::new(Snapshot::default(), BoardBounds::new(8, 5));
        assert!(w.is_safe_position(Position::new(4, 7)));
        assert!(!w.is_safe_position(Position::new(5, 4)));
        assert!(!w.is_safe_position(Position::new(4, 8)));
    }

    // -----------------------------------------------------------------------
    // Safe zone and other heads
    // -----------------------------------------------------------------------

    #[test]
    fn safe_zone_membership() {
        let mut w = world(Vec::new(), Vec::new());
        assert!(w.in_safe_zone(Position::new(0, 0)));

        let bounds = Rect::new(5, 5, 10, 10);
        w.snapshot.safe_zone = Some(SafeZoneSchedule {
            current: bounds,
            next: ShrinkEvent { tick: None, bounds },
            last: ShrinkEvent { tick: None, bounds },
        });
        assert!(!w.in_safe_zone(Position::new(0, 0)));
        assert!(w.in_safe_zone(Position::new(5, 10)));
    }

    #[test]
    fn zone_decoded_from_extended_stream_uses_columns() {
        // Zone covers columns 30..=39 on every row; the head sits at row 5,
        // column 35.
        let input = "\
10
0
1
7 1 0 0 0 0 0
5 35
0
0
30 0 39 29
-1 30 0 39 29
-1 30 0 39 29
";
        let snapshot =
            decode_snapshot(input, ProtocolVariant::Extended.schema(), 7).unwrap();
        let w = WorldState::new(snapshot, BoardBounds::default());
        assert!(w.in_safe_zone(Position::new(5, 35)));
        assert!(w.in_safe_zone(Position::new(29, 30)));
        assert!(!w.in_safe_zone(Position::new(5, 29)));
        assert!(w.is_safe_position(Position::new(5, 34)));
        assert!(w.is_safe_position(Position::new(29, 39)));
    }

    #[test]
    fn other_heads_skip_self() {
        let w = world(Vec::new(), vec![snake(1, &[(1, 1)]), snake(2, &[(2, 2)]), snake(3, &[])]);
        let heads: Vec<Position> = w.other_heads(1).collect();
        assert_eq!(heads, vec![Position::new(2, 2)]);
    }
}
