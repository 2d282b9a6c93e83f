//! Agent configuration.
//!
//! Every tunable lives here rather than in the code: the agent's player id,
//! board size, shield rules, fallback action, protocol layout and move
//! selector. Values come from an optional YAML file named by
//! `SNAKEBOT_CONFIG`, then individual environment variables override them.
//!
//! ```yaml
//! identity: 2023000000
//! board: { width: 40, height: 30 }
//! shield_threshold: 20
//! shield_roll_probability: 0.1
//! default_action: right
//! protocol: extended
//! snake_has_key: false
//! selector: greedy
//! seed: 7
//! ```

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use snakebot_protocol::{ProtocolVariant, Schema};
use snakebot_types::Action;
use snakebot_world::BoardBounds;

use crate::selector::SelectorKind;

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "SNAKEBOT_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value is present but unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Complete agent configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentConfig {
    /// Player id that marks the agent's own snake in the snapshot.
    #[serde(default)]
    pub identity: i64,

    /// Board dimensions used by the safety check.
    #[serde(default)]
    pub board: BoardBounds,

    /// Minimum score for the shield to be available.
    #[serde(default = "default_shield_threshold")]
    pub shield_threshold: i32,

    /// Probability of a pre-emptive shield when one is available.
    #[serde(default = "default_shield_roll_probability")]
    pub shield_roll_probability: f64,

    /// Action emitted when the tick fails.
    #[serde(default = "default_action")]
    pub default_action: Action,

    /// Snapshot layout spoken by the match engine.
    #[serde(default)]
    pub protocol: ProtocolVariant,

    /// Override for the per-snake key flag; `None` keeps the variant's layout.
    #[serde(default)]
    pub snake_has_key: Option<bool>,

    /// Move selector used among safe directions.
    #[serde(default)]
    pub selector: SelectorKind,

    /// Fixed random seed; `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_shield_threshold() -> i32 {
    20
}

const fn default_shield_roll_probability() -> f64 {
    0.1
}

const fn default_action() -> Action {
    Action::Right
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            identity: 0,
            board: BoardBounds::default(),
            shield_threshold: default_shield_threshold(),
            shield_roll_probability: default_shield_roll_probability(),
            default_action: default_action(),
            protocol: ProtocolVariant::default(),
            snake_has_key: None,
            selector: SelectorKind::default(),
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Load from the file named by `SNAKEBOT_CONFIG` (if set), apply
    /// environment overrides and validate.
    ///
    /// Recognised overrides: `SNAKEBOT_IDENTITY`, `SNAKEBOT_BOARD_WIDTH`,
    /// `SNAKEBOT_BOARD_HEIGHT`, `SNAKEBOT_SHIELD_THRESHOLD`,
    /// `SNAKEBOT_SHIELD_ROLL_PROBABILITY`, `SNAKEBOT_DEFAULT_ACTION`,
    /// `SNAKEBOT_PROTOCOL`, `SNAKEBOT_SELECTOR`, `SNAKEBOT_SEED`.
    pub fn load() -> Result<Self, ConfigError> {
        let lookup = |name: &str| std::env::var(name).ok();
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string. An empty document yields the
    /// defaults.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from a variable lookup (normally the process
    /// environment).
    pub fn apply_env_overrides(
        &mut self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = parse_var(lookup, "SNAKEBOT_IDENTITY")? {
            self.identity = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_BOARD_WIDTH")? {
            self.board.width = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_BOARD_HEIGHT")? {
            self.board.height = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_SHIELD_THRESHOLD")? {
            self.shield_threshold = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_SHIELD_ROLL_PROBABILITY")? {
            self.shield_roll_probability = v;
        }
        if let Some(raw) = lookup("SNAKEBOT_DEFAULT_ACTION") {
            self.default_action = parse_action(&raw)?;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_PROTOCOL")? {
            self.protocol = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_SELECTOR")? {
            self.selector = v;
        }
        if let Some(v) = parse_var(lookup, "SNAKEBOT_SEED")? {
            self.seed = Some(v);
        }
        Ok(())
    }

    /// Reject values the agent cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width <= 0 || self.board.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "board must be positive, got {}x{}",
                self.board.width, self.board.height
            )));
        }
        if !(0.0..=1.0).contains(&self.shield_roll_probability) {
            return Err(ConfigError::Invalid(format!(
                "shield_roll_probability must be within [0, 1], got {}",
                self.shield_roll_probability
            )));
        }
        Ok(())
    }

    /// The wire layout to decode with.
    pub const fn schema(&self) -> Schema {
        let schema = self.protocol.schema();
        match self.snake_has_key {
            Some(present) => schema.with_snake_has_key(present),
            None => schema,
        }
    }
}

/// Read and parse one variable, if set.
fn parse_var<T>(
    lookup: &dyn Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("invalid {name}: {e}")))
        })
        .transpose()
}

/// Accepts a lowercase name (`right`) or a wire code (`2`).
fn parse_action(raw: &str) -> Result<Action, ConfigError> {
    let raw = raw.trim();
    if let Ok(code) = raw.parse::<i64>() {
        return Action::from_code(code)
            .ok_or_else(|| ConfigError::Invalid(format!("action code out of range: {code}")));
    }
    match raw.to_lowercase().as_str() {
        "left" => Ok(Action::Left),
        "up" => Ok(Action::Up),
        "right" => Ok(Action::Right),
        "down" => Ok(Action::Down),
        "shield" => Ok(Action::Shield),
        other => Err(ConfigError::Invalid(format!("unknown action: {other}"))),
    }
}
