//! Error types for one agent tick.
//!
//! None of these ever reach the process exit code: the emitter logs them and
//! writes the configured default action instead.

use snakebot_protocol::ProtocolError;
use snakebot_world::WorldError;

/// Errors that can occur while producing an action for one tick.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Reading the snapshot or writing the action failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The snapshot could not be decoded.
    #[error("protocol error: {source}")]
    Protocol {
        /// The underlying decode error.
        #[from]
        source: ProtocolError,
    },

    /// The decoded world was internally inconsistent.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The decision panicked.
    #[error("decision panicked: {message}")]
    Panicked {
        /// The panic payload, when it was a string.
        message: String,
    },
}
