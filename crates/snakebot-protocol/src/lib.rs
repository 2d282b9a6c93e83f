//! Tick snapshot codec for the snakebot decision agent.
//!
//! The match engine writes each tick as a stream of whitespace-separated
//! integers. This crate turns that stream into a [`Snapshot`] and back.
//!
//! # Modules
//!
//! - [`decode`] -- Schema-ordered reader that also locates the agent's snake
//! - [`encode`] -- Writer producing the same layout, one record per line
//! - [`error`] -- [`ProtocolError`], the malformed-input family
//! - [`tokens`] -- Integer token cursor with per-field error reporting
//! - [`variant`] -- [`ProtocolVariant`] selection and its optional-field [`Schema`]
//!
//! [`Snapshot`]: snakebot_types::Snapshot

pub mod decode;
pub mod encode;
pub mod error;
pub mod tokens;
pub mod variant;

pub use decode::decode_snapshot;
pub use encode::encode_snapshot;
pub use error::ProtocolError;
pub use variant::{ProtocolVariant, Schema};
