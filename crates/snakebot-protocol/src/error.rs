//! Error types for the snapshot codec.
//!
//! Every variant means the input did not follow the selected schema. The
//! agent never recovers from these locally; they surface at the emitter
//! boundary, which substitutes the configured default action.

/// A malformed tick snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The stream ended before the schema was satisfied, i.e. a count
    /// promised more records than the input holds.
    #[error("input ended while reading {field}")]
    UnexpectedEnd {
        /// The field being read.
        field: &'static str,
    },

    /// A token could not be parsed as the expected integer type.
    #[error("invalid token {token:?} for {field}")]
    InvalidToken {
        /// The field being read.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// A record count or snake length was negative.
    #[error("negative {field}: {value}")]
    NegativeCount {
        /// The count field.
        field: &'static str,
        /// The value read.
        value: i64,
    },

    /// A snake heading outside `0..=3`.
    #[error("snake {snake_id} has invalid direction code {value}")]
    InvalidDirection {
        /// The snake's id.
        snake_id: i64,
        /// The value read.
        value: i64,
    },

    /// A protocol variant name that is not recognised.
    #[error("unknown protocol variant: {name}")]
    UnknownVariant {
        /// The name supplied.
        name: String,
    },
}
