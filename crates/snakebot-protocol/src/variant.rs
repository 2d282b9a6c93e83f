//! Protocol variant selection.
//!
//! The match engine has shipped two snapshot layouts. Both decode into the
//! same [`Snapshot`](snakebot_types::Snapshot); the variant only decides which
//! optional fields are present on the wire.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// The snapshot layout the match engine speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVariant {
    /// Ticks, items `(x y value)` and snakes only.
    #[default]
    Classic,
    /// Classic plus item lifetimes, per-snake key flags, chests, keys and the
    /// three-line safe-zone block.
    Extended,
}

impl ProtocolVariant {
    /// The optional-field layout of this variant.
    pub const fn schema(self) -> Schema {
        match self {
            Self::Classic => Schema {
                item_lifetime: false,
                snake_has_key: false,
                chests: false,
                keys: false,
                safe_zone: false,
            },
            Self::Extended => Schema {
                item_lifetime: true,
                snake_has_key: true,
                chests: true,
                keys: true,
                safe_zone: true,
            },
        }
    }

    /// Lowercase name, matching the configuration spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl FromStr for ProtocolVariant {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "basic" => Ok(Self::Classic),
            "extended" | "rich" => Ok(Self::Extended),
            other => Err(ProtocolError::UnknownVariant {
                name: other.to_owned(),
            }),
        }
    }
}

/// Which optional fields appear in the token stream.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schema {
    /// Each item record ends with a lifetime.
    pub item_lifetime: bool,
    /// Each snake header ends with a `hasKey` flag.
    pub snake_has_key: bool,
    /// A chest block follows the snakes.
    pub chests: bool,
    /// A key block follows the chests.
    pub keys: bool,
    /// Three safe-zone lines close the snapshot.
    pub safe_zone: bool,
}

impl Schema {
    /// Override whether snake headers carry the `hasKey` flag.
    ///
    /// Some extended-engine builds omit the flag; key ownership is then
    /// derived from the key block instead.
    pub const fn with_snake_has_key(mut self, present: bool) -> Self {
        self.snake_has_key = present;
        self
    }
}

impl From<ProtocolVariant> for Schema {
    fn from(variant: ProtocolVariant) -> Self {
        variant.schema()
    }
}
