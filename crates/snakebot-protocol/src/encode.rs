//! Snapshot encoding, the inverse of [`decode_snapshot`](crate::decode_snapshot).
//!
//! Produces one record per line in the same order the decoder reads. Used to
//! build fixtures and to check that decoding loses nothing.

use snakebot_types::{Rect, ShrinkEvent, Snapshot};

use crate::variant::Schema;

/// Serialize a snapshot in the layout described by `schema`.
///
/// Fields the schema does not carry are dropped. A missing safe-zone
/// schedule under a schema that expects one is written as the full default
/// board with no shrinks scheduled.
pub fn encode_snapshot(snapshot: &Snapshot, schema: Schema) -> String {
    let mut lines = vec![snapshot.remaining_ticks.to_string(), snapshot.items.len().to_string()];

    for item in &snapshot.items {
        let mut line = format!("{} {} {}", item.position.row, item.position.col, item.value);
        if schema.item_lifetime {
            line.push_str(&format!(" {}", item.lifetime.unwrap_or(-1)));
        }
        lines.push(line);
    }

    lines.push(snapshot.snakes.len().to_string());
    for snake in &snapshot.snakes {
        let mut header = format!(
            "{} {} {} {} {} {}",
            snake.id,
            snake.body.len(),
            snake.score,
            snake.direction.code(),
            snake.shield_cooldown,
            snake.shield_duration
        );
        if schema.snake_has_key {
            header.push_str(if snake.has_key.unwrap_or(false) { " 1" } else { " 0" });
        }
        lines.push(header);
        for segment in &snake.body {
            lines.push(format!("{} {}", segment.row, segment.col));
        }
    }

    if schema.chests {
        lines.push(snapshot.chests.len().to_string());
        for chest in &snapshot.chests {
            lines.push(format!(
                "{} {} {}",
                chest.position.row, chest.position.col, chest.score
            ));
        }
    }

    if schema.keys {
        lines.push(snapshot.keys.len().to_string());
        for key in &snapshot.keys {
            lines.push(format!(
                "{} {} {} {}",
                key.position.row, key.position.col, key.holder, key.remaining_time
            ));
        }
    }

    if schema.safe_zone {
        let default_bounds = Rect::new(0, 0, 29, 39);
        let (current, next, last) = snapshot.safe_zone.map_or(
            (
                default_bounds,
                ShrinkEvent {
                    tick: None,
                    bounds: default_bounds,
                },
                ShrinkEvent {
                    tick: None,
                    bounds: default_bounds,
                },
            ),
            |zone| (zone.current, zone.next, zone.last),
        );
        lines.push(rect_line(current));
        lines.push(shrink_line(next));
        lines.push(shrink_line(last));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Zone rectangles go out column first.
fn rect_line(rect: Rect) -> String {
    format!("{} {} {} {}", rect.col_min, rect.row_min, rect.col_max, rect.row_max)
}

fn shrink_line(event: ShrinkEvent) -> String {
    format!("{} {}", event.tick.unwrap_or(-1), rect_line(event.bounds))
}
