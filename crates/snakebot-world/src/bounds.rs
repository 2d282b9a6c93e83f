//! Board dimensions.

use serde::Deserialize;
use snakebot_types::Position;

/// Default number of columns.
pub const DEFAULT_WIDTH: i32 = 40;
/// Default number of rows.
pub const DEFAULT_HEIGHT: i32 = 30;

/// The playable grid: `row` in `[0, height)` and `col` in `[0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct BoardBounds {
    /// Number of columns.
    #[serde(default = "default_width")]
    pub width: i32,
    /// Number of rows.
    #[serde(default = "default_height")]
    pub height: i32,
}

const fn default_width() -> i32 {
    DEFAULT_WIDTH
}

const fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardBounds {
    /// Create bounds of the given size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` is on the board.
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.height && pos.col >= 0 && pos.col < self.width
    }
}
