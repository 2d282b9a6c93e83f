//! Snapshot decoding.
//!
//! Reads the token stream in fixed schema order:
//!
//! ```text
//! remainingTicks
//! itemCount   { row col value [lifetime] }*
//! snakeCount  { id length score direction shieldCooldown shieldDuration [hasKey]
//!               { row col }*length }*
//! [chestCount { row col score }*]
//! [keyCount   { row col holder remainingTime }*]
//! [xMin yMin xMax yMax
//!  tick xMin yMin xMax yMax
//!  tick xMin yMin xMax yMax]
//! ```
//!
//! Bracketed parts are present only when the [`Schema`] says so. Positions
//! are row first, but zone rectangles are column first: `x` is the column
//! and `y` is the row.

use snakebot_types::{
    Chest, Direction, Item, Key, Rect, SafeZoneSchedule, ShrinkEvent, Snake, Snapshot,
};
use tracing::debug;

use crate::error::ProtocolError;
use crate::tokens::TokenReader;
use crate::variant::Schema;

/// Decode one tick snapshot.
///
/// `identity` is the agent's configured player id. The last snake whose id
/// matches is recorded in [`Snapshot::self_index`]; when none matches the
/// index is `None`, which is a normal state rather than an error.
///
/// Tokens left over after the schema is satisfied are ignored.
///
/// # Errors
///
/// Returns [`ProtocolError`] when a token is not an integer of the expected
/// range, a count or length is negative, a heading is not a direction code,
/// or the input ends before every counted record has been read.
pub fn decode_snapshot(
    input: &str,
    schema: Schema,
    identity: i64,
) -> Result<Snapshot, ProtocolError> {
    let mut reader = TokenReader::new(input);

    let remaining_ticks = reader.read("remaining ticks")?;
    let items = read_items(&mut reader, schema)?;
    let (mut snakes, self_index) = read_snakes(&mut reader, schema, identity)?;

    let chests = if schema.chests {
        read_chests(&mut reader)?
    } else {
        Vec::new()
    };
    let keys = if schema.keys {
        read_keys(&mut reader)?
    } else {
        Vec::new()
    };
    let safe_zone = if schema.safe_zone {
        Some(read_safe_zone(&mut reader)?)
    } else {
        None
    };

    if schema.keys && !schema.snake_has_key {
        for snake in &mut snakes {
            snake.has_key = Some(keys.iter().any(|k| k.holder() == Some(snake.id)));
        }
    }

    let trailing = reader.remaining();
    if trailing > 0 {
        debug!(
            trailing,
            consumed = reader.consumed(),
            "ignoring tokens after end of snapshot"
        );
    }

    match self_index {
        Some(index) => debug!(identity, index, "own snake located"),
        None => debug!(identity, "own snake absent from snapshot"),
    }

    Ok(Snapshot {
        remaining_ticks,
        items,
        snakes,
        chests,
        keys,
        safe_zone,
        self_index,
    })
}

fn read_items(reader: &mut TokenReader<'_>, schema: Schema) -> Result<Vec<Item>, ProtocolError> {
    let count = reader.count("item count")?;
    let mut items = Vec::new();
    for _ in 0..count {
        let position = reader.position("item position")?;
        let value = reader.read("item value")?;
        let lifetime = if schema.item_lifetime {
            Some(reader.read("item lifetime")?)
        } else {
            None
        };
        items.push(Item {
            position,
            value,
            lifetime,
        });
    }
    Ok(items)
}

fn read_snakes(
    reader: &mut TokenReader<'_>,
    schema: Schema,
    identity: i64,
) -> Result<(Vec<Snake>, Option<usize>), ProtocolError> {
    let count = reader.count("snake count")?;
    let mut snakes = Vec::new();
    let mut self_index = None;

    for index in 0..count {
        let snake = read_snake(reader, schema)?;
        if snake.id == identity {
            self_index = Some(index);
        }
        snakes.push(snake);
    }

    Ok((snakes, self_index))
}

fn read_snake(reader: &mut TokenReader<'_>, schema: Schema) -> Result<Snake, ProtocolError> {
    let id: i64 = reader.read("snake id")?;
    let length_raw: i64 = reader.read("snake length")?;
    let length = u32::try_from(length_raw).map_err(|_negative| ProtocolError::NegativeCount {
        field: "snake length",
        value: length_raw,
    })?;
    let score = reader.read("snake score")?;
    let direction_code: i64 = reader.read("snake direction")?;
    let direction = Direction::from_code(direction_code).ok_or(ProtocolError::InvalidDirection {
        snake_id: id,
        value: direction_code,
    })?;
    let shield_cooldown = reader.read("shield cooldown")?;
    let shield_duration = reader.read("shield duration")?;
    let has_key = if schema.snake_has_key {
        let flag: i32 = reader.read("snake key flag")?;
        Some(flag != 0)
    } else {
        None
    };

    let mut body = Vec::new();
    for _ in 0..length {
        body.push(reader.position("snake body")?);
    }

    Ok(Snake {
        id,
        length,
        score,
        direction,
        shield_cooldown,
        shield_duration,
        body,
        has_key,
    })
}

fn read_chests(reader: &mut TokenReader<'_>) -> Result<Vec<Chest>, ProtocolError> {
    let count = reader.count("chest count")?;
    let mut chests = Vec::new();
    for _ in 0..count {
        let position = reader.position("chest position")?;
        let score = reader.read("chest score")?;
        chests.push(Chest { position, score });
    }
    Ok(chests)
}

fn read_keys(reader: &mut TokenReader<'_>) -> Result<Vec<Key>, ProtocolError> {
    let count = reader.count("key count")?;
    let mut keys = Vec::new();
    for _ in 0..count {
        let position = reader.position("key position")?;
        let holder = reader.read("key holder")?;
        let remaining_time = reader.read("key remaining time")?;
        keys.push(Key {
            position,
            holder,
            remaining_time,
        });
    }
    Ok(keys)
}

fn read_rect(reader: &mut TokenReader<'_>, field: &'static str) -> Result<Rect, ProtocolError> {
    let col_min = reader.read(field)?;
    let row_min = reader.read(field)?;
    let col_max = reader.read(field)?;
    let row_max = reader.read(field)?;
    Ok(Rect::new(row_min, col_min, row_max, col_max))
}

fn read_shrink(
    reader: &mut TokenReader<'_>,
    field: &'static str,
) -> Result<ShrinkEvent, ProtocolError> {
    let tick: i32 = reader.read(field)?;
    let bounds = read_rect(reader, field)?;
    Ok(ShrinkEvent {
        tick: (tick >= 0).then_some(tick),
        bounds,
    })
}

fn read_safe_zone(reader: &mut TokenReader<'_>) -> Result<SafeZoneSchedule, ProtocolError> {
    Ok(SafeZoneSchedule {
        current: read_rect(reader, "safe zone bounds")?,
        next: read_shrink(reader, "next shrink")?,
        last: read_shrink(reader, "final shrink")?,
    })
}
