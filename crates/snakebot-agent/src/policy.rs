//! The per-tick fallback decision ladder.
//!
//! Every tick walks the same stages in order and stops at the first one that
//! produces an action:
//!
//! 1. `NoSelf`: the agent has no snake this tick; any direction will do.
//! 2. `ShieldRoll`: the shield is available and a configured coin flip hits.
//! 3. `SafeMove`: at least one neighbouring cell is safe; the
//!    [`MoveSelector`] picks among them.
//! 4. `ForcedShield`: nothing is safe but the shield is available.
//! 5. `ForcedRandom`: nothing is safe and no shield; any direction.
//!
//! The ladder cannot fall through: the last stage always yields an action.

use snakebot_types::{Action, Direction};
use snakebot_world::{WorldState, evaluate};
use tracing::{info, warn};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::random::RandomSource;
use crate::selector::{MoveSelector, build_selector};

// ---------------------------------------------------------------------------
// Decision tagging
// ---------------------------------------------------------------------------

/// The ladder stage that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStage {
    /// No owned snake this tick.
    NoSelf,
    /// Pre-emptive shield roll succeeded.
    ShieldRoll,
    /// A safe direction was available.
    SafeMove,
    /// Trapped, shield available.
    ForcedShield,
    /// Trapped, no shield.
    ForcedRandom,
}

impl DecisionStage {
    /// Label for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSelf => "no_self",
            Self::ShieldRoll => "shield_roll",
            Self::SafeMove => "safe_move",
            Self::ForcedShield => "forced_shield",
            Self::ForcedRandom => "forced_random",
        }
    }
}

/// One tick's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The action to emit.
    pub action: Action,
    /// Which stage chose it.
    pub stage: DecisionStage,
}

impl Decision {
    const fn new(action: Action, stage: DecisionStage) -> Self {
        Self { action, stage }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// The decision ladder with its tunables.
pub struct DecisionPolicy {
    shield_threshold: i32,
    shield_roll_probability: f64,
    selector: Box<dyn MoveSelector>,
}

impl DecisionPolicy {
    /// A policy with explicit tunables.
    pub const fn new(
        shield_threshold: i32,
        shield_roll_probability: f64,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        Self {
            shield_threshold,
            shield_roll_probability,
            selector,
        }
    }

    /// A policy built from the agent configuration.
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            config.shield_threshold,
            config.shield_roll_probability,
            build_selector(config.selector),
        )
    }

    /// Run the ladder for one tick.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::World`] when the agent's snake has no body.
    pub fn decide(
        &self,
        world: &WorldState,
        rng: &mut dyn RandomSource,
    ) -> Result<Decision, AgentError> {
        let Some(me) = world.my_snake() else {
            let direction = rng.any_direction();
            info!(rule = "no_self", action = ?direction, "policy: no snake this tick");
            return Ok(Decision::new(direction.into(), DecisionStage::NoSelf));
        };

        let can_shield = me.can_use_shield(self.shield_threshold);
        if can_shield && rng.chance(self.shield_roll_probability) {
            info!(snake_id = me.id, rule = "shield_roll", "policy: pre-emptive shield");
            return Ok(Decision::new(Action::Shield, DecisionStage::ShieldRoll));
        }

        let report = evaluate(world, me, self.shield_threshold)?;

        if !report.is_trapped() {
            let direction = self
                .selector
                .select(world, me, &report.safe, rng)
                .or_else(|| first_safe(&report.safe));
            if let Some(direction) = direction {
                info!(
                    snake_id = me.id,
                    rule = "safe_move",
                    selector = self.selector.name(),
                    safe_count = report.safe.len(),
                    action = ?direction,
                    "policy: safe move"
                );
                return Ok(Decision::new(direction.into(), DecisionStage::SafeMove));
            }
        }

        if report.can_shield {
            info!(snake_id = me.id, rule = "forced_shield", "policy: trapped, shielding");
            return Ok(Decision::new(Action::Shield, DecisionStage::ForcedShield));
        }

        let direction = rng.any_direction();
        warn!(
            snake_id = me.id,
            head = %report.head,
            rule = "forced_random",
            action = ?direction,
            "policy: trapped without shield"
        );
        Ok(Decision::new(direction.into(), DecisionStage::ForcedRandom))
    }
}

fn first_safe(safe: &[Direction]) -> Option<Direction> {
    let first = safe.first().copied();
    if first.is_some() {
        warn!("selector declined a non-empty safe set, taking the first safe direction");
    }
    first
}
