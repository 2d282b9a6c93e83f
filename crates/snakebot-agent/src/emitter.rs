//! The tick boundary: read, decide, emit.
//!
//! [`run_tick`] is the only place failures are handled. Decode errors, world
//! errors and panics inside the decision are all logged and replaced by the
//! configured default action, so exactly one action line is written per tick.

use std::any::Any;
use std::io::{self, Read, Write};
use std::panic::{self, AssertUnwindSafe};

use snakebot_protocol::decode_snapshot;
use snakebot_types::Action;
use snakebot_world::WorldState;
use tracing::{debug, error, warn};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::policy::{Decision, DecisionPolicy};
use crate::random::RandomSource;

/// Write one action as its decimal code plus newline, then flush.
pub fn emit<W: Write>(out: &mut W, action: Action) -> io::Result<()> {
    writeln!(out, "{}", action.code())?;
    out.flush()
}

/// Read the whole snapshot from `input` and run the decision ladder on it.
pub fn decide_tick<R: Read>(
    mut input: R,
    config: &AgentConfig,
    policy: &DecisionPolicy,
    rng: &mut dyn RandomSource,
) -> Result<Decision, AgentError> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let snapshot = decode_snapshot(&raw, config.schema(), config.identity)?;
    debug!(
        remaining_ticks = snapshot.remaining_ticks,
        items = snapshot.items.len(),
        snakes = snapshot.snakes.len(),
        has_self = snapshot.self_index.is_some(),
        "snapshot decoded"
    );
    let world = WorldState::new(snapshot, config.board);
    policy.decide(&world, rng)
}

/// Run one full tick and return the action that was written.
///
/// Never fails: any error or panic while deciding turns into
/// `config.default_action`. A failure to write is logged.
pub fn run_tick<R: Read, W: Write>(
    input: R,
    output: &mut W,
    config: &AgentConfig,
    policy: &DecisionPolicy,
    rng: &mut dyn RandomSource,
) -> Action {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        decide_tick(input, config, policy, rng)
    }))
    .unwrap_or_else(|payload| {
        Err(AgentError::Panicked {
            message: panic_message(payload.as_ref()),
        })
    });

    let action = match outcome {
        Ok(decision) => {
            debug!(
                stage = decision.stage.as_str(),
                action = %decision.action,
                "tick decided"
            );
            decision.action
        }
        Err(err) => {
            warn!(
                error = %err,
                fallback = %config.default_action,
                "tick failed, emitting default action"
            );
            config.default_action
        }
    };

    if let Err(err) = emit(output, action) {
        error!(error = %err, action = %action, "failed to write action");
    }
    action
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("non-string panic payload"))
}
