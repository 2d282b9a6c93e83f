//! Adjacency safety for the agent's next move.

use snakebot_types::{Direction, Position, Snake};
use tracing::debug;

use crate::error::WorldError;
use crate::world_state::WorldState;

/// Directions whose neighbouring cell is currently safe, in wire-code order.
pub fn safe_directions(world: &WorldState, head: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| world.is_safe_position(head.offset(d)))
        .collect()
}

/// The safety picture for one snake this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyReport {
    /// The snake's head.
    pub head: Position,
    /// Directions that lead to a safe cell.
    pub safe: Vec<Direction>,
    /// Whether the shield action is available, independent of `safe`.
    pub can_shield: bool,
}

impl SafetyReport {
    /// Whether no direction is safe.
    pub fn is_trapped(&self) -> bool {
        self.safe.is_empty()
    }
}

/// Evaluate every move for `snake`.
///
/// # Errors
///
/// Returns [`WorldError::EmptyBody`] when the snake has no head.
pub fn evaluate(
    world: &WorldState,
    snake: &Snake,
    shield_threshold: i32,
) -> Result<SafetyReport, WorldError> {
    let head = WorldState::head_of(snake)?;
    let safe = safe_directions(world, head);
    let can_shield = snake.can_use_shield(shield_threshold);
    debug!(
        snake_id = snake.id,
        head = %head,
        safe_count = safe.len(),
        can_shield,
        "safety evaluated"
    );
    Ok(SafetyReport {
        head,
        safe,
        can_shield,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use snakebot_protocol::{ProtocolVariant, decode_snapshot};

    use super::*;
    use crate::bounds::BoardBounds;

    const ME: i64 = 1001;

    fn world_from(input: &str) -> WorldState {
        let snapshot =
            decode_snapshot(input, ProtocolVariant::Classic.schema(), ME).unwrap();
        WorldState::new(snapshot, BoardBounds::default())
    }

    fn my_report(world: &WorldState, threshold: i32) -> Option<SafetyReport> {
        world
            .my_snake()
            .and_then(|me| evaluate(world, me, threshold).ok())
    }

    #[test]
    fn open_board_all_directions_safe() {
        let w = world_from("10 0 1 1001 1 0 0 0 0 5 5");
        let report = my_report(&w, 20);
        assert_eq!(report.map(|r| r.safe), Some(Direction::ALL.to_vec()));
    }

    #[test]
    fn left_wall_removes_left() {
        // Wall at (5,4), the LEFT neighbour of (5,5).
        let w = world_from("10 1 5 4 -4 1 1001 1 0 0 0 0 5 5");
        let report = my_report(&w, 20);
        assert_eq!(
            report.map(|r| r.safe),
            Some(vec![Direction::Up, Direction::Right, Direction::Down])
        );
    }

    #[test]
    fn corner_limits_moves() {
        let w = world_from("10 0 1 1001 1 0 0 0 0 0 0");
        let report = my_report(&w, 20);
        assert_eq!(report.map(|r| r.safe), Some(vec![Direction::Right, Direction::Down]));
    }

    #[test]
    fn own_neck_is_unsafe() {
        // Head (5,5), neck (5,4) on the left.
        let w = world_from("10 0 1 1001 2 0 2 0 0 5 5 5 4");
        let report = my_report(&w, 20);
        assert!(report.is_some_and(|r| !r.safe.contains(&Direction::Left)));
    }

    #[test]
    fn boxed_in_reports_trapped_and_shield() {
        let w = world_from(
            "10 4 5 4 -4 4 5 -4 5 6 -4 6 5 -4 1 1001 1 25 0 0 0 5 5",
        );
        let report = my_report(&w, 20);
        assert!(report.as_ref().is_some_and(SafetyReport::is_trapped));
        assert!(report.is_some_and(|r| r.can_shield));
    }

    #[test]
    fn shield_availability_ignores_adjacency() {
        let w = world_from("10 0 1 1001 1 25 0 0 0 5 5");
        assert!(my_report(&w, 20).is_some_and(|r| r.can_shield && !r.is_trapped()));
        assert!(my_report(&w, 30).is_some_and(|r| !r.can_shield));
    }

    #[test]
    fn empty_body_is_an_error() {
        let w = world_from("10 0 1 1001 0 0 0 0 0");
        let me = w.my_snake().cloned();
        let result = me.map(|s| evaluate(&w, &s, 20));
        assert_eq!(result, Some(Err(WorldError::EmptyBody { snake_id: ME })));
    }
}
