//! Decision agent binary for the grid snake contest.
//!
//! The match engine starts one process per tick, writes the world snapshot to
//! stdin and reads a single action code from stdout before the tick
//! deadline. Diagnostics go to stderr only.
//!
//! # Tick Sequence
//!
//! 1. Initialize structured logging (tracing, stderr)
//! 2. Load configuration (`SNAKEBOT_CONFIG` plus `SNAKEBOT_*` overrides)
//! 3. Seed the random source
//! 4. Decode the snapshot and run the decision ladder
//! 5. Write exactly one action line
//!
//! The process exits with status 0 on every path; a failed tick still writes
//! the configured default action.

mod config;
mod emitter;
mod error;
mod policy;
mod random;
mod selector;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AgentConfig;
use crate::emitter::run_tick;
use crate::policy::DecisionPolicy;
use crate::random::RngSource;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "configuration rejected, using defaults");
            AgentConfig::default()
        }
    };
    info!(
        identity = config.identity,
        protocol = config.protocol.as_str(),
        selector = config.selector.as_str(),
        seeded = config.seed.is_some(),
        "configuration loaded"
    );

    let policy = DecisionPolicy::from_config(&config);
    let mut rng = config
        .seed
        .map_or_else(RngSource::from_os_entropy, RngSource::seeded);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let action = run_tick(stdin.lock(), &mut stdout.lock(), &config, &policy, &mut rng);
    info!(action = %action, "tick complete");
}

fn load_config() -> anyhow::Result<AgentConfig> {
    AgentConfig::load().context("failed to load agent configuration")
}
