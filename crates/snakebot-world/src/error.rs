//! Error types for the `snakebot-world` crate.

/// Errors raised by world-state queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A head was requested from a snake with no body segments. A
    /// well-formed snapshot never produces this for a live snake.
    #[error("snake {snake_id} has no body segments")]
    EmptyBody {
        /// The snake whose head was requested.
        snake_id: i64,
    },
}
