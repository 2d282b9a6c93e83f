//! Grid geometry: positions, movement directions, wire actions and rectangles.
//!
//! Positions are `(row, col)`, the order the match engine writes them. UP and
//! DOWN move along rows, LEFT and RIGHT along columns. Safe-zone rectangles
//! arrive column-first on the wire and are stored with named row and column
//! bounds so the two orders never meet.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An integer grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing to the right.
    pub col: i32,
}

impl Position {
    /// Create a position from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// The neighbouring cell one step in `direction`.
    pub const fn offset(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// The four orthogonal neighbours in direction code order.
    pub fn neighbours(self) -> [(Direction, Self); 4] {
        Direction::ALL.map(|d| (d, self.offset(d)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal movement direction.
///
/// The discriminant is the wire code used both in the snapshot (a snake's
/// current heading) and in the emitted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Code 0, offset `(0, -1)`.
    Left,
    /// Code 1, offset `(-1, 0)`.
    Up,
    /// Code 2, offset `(0, 1)`.
    Right,
    /// Code 3, offset `(1, 0)`.
    Down,
}

impl Direction {
    /// All directions in wire-code order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// The `(row, col)` step applied by this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Wire code in `0..=3`.
    pub const fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// Parse a wire code. Returns `None` outside `0..=3`.
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Up),
            2 => Some(Self::Right),
            3 => Some(Self::Down),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// The single action emitted per tick.
///
/// Serialized in configuration files as a lowercase name (`right`, `shield`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Turn or keep moving left (code 0).
    Left,
    /// Turn or keep moving up (code 1).
    Up,
    /// Turn or keep moving right (code 2).
    Right,
    /// Turn or keep moving down (code 3).
    Down,
    /// Activate the temporary invulnerability shield (code 4).
    Shield,
}

impl Action {
    /// Wire code in `0..=4`.
    pub const fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
            Self::Shield => 4,
        }
    }

    /// Parse a wire code. Returns `None` outside `0..=4`.
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            4 => Some(Self::Shield),
            other => match Direction::from_code(other) {
                Some(direction) => Some(Self::from_direction(direction)),
                None => None,
            },
        }
    }

    /// The movement direction, or `None` for [`Action::Shield`].
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Left),
            Self::Up => Some(Direction::Up),
            Self::Right => Some(Direction::Right),
            Self::Down => Some(Direction::Down),
            Self::Shield => None,
        }
    }

    const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Left,
            Direction::Up => Self::Up,
            Direction::Right => Self::Right,
            Direction::Down => Self::Down,
        }
    }

    /// Lowercase name, matching the configuration spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Shield => "shield",
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Smallest row inside the rectangle.
    pub row_min: i32,
    /// Smallest column inside the rectangle.
    pub col_min: i32,
    /// Largest row inside the rectangle.
    pub row_max: i32,
    /// Largest column inside the rectangle.
    pub col_max: i32,
}

impl Rect {
    /// Create a rectangle from its inclusive row and column bounds.
    pub const fn new(row_min: i32, col_min: i32, row_max: i32, col_max: i32) -> Self {
        Self {
            row_min,
            col_min,
            row_max,
            col_max,
        }
    }

    /// Whether `pos` lies inside the rectangle, edges included.
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row >= self.row_min
            && pos.row <= self.row_max
            && pos.col >= self.col_min
            && pos.col <= self.col_max
    }
}
