//! Move selection among safe directions.
//!
//! The decision ladder only decides *whether* a safe move exists; which safe
//! move to take is delegated to a [`MoveSelector`]. The baseline
//! [`UniformSelector`] draws uniformly. [`GreedySelector`] scores each
//! candidate cell against food, chests, keys, traps, rival heads, the safe
//! zone and onward mobility.

use std::str::FromStr;

use serde::Deserialize;
use snakebot_types::{Direction, Item, ItemKind, Position, Snake};
use snakebot_world::WorldState;
use tracing::debug;

use crate::config::ConfigError;
use crate::random::RandomSource;

/// Which selector the agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// Uniform over the safe set.
    #[default]
    Uniform,
    /// Highest heuristic score, ties drawn uniformly.
    Greedy,
}

impl SelectorKind {
    /// Lowercase name, matching the configuration spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Greedy => "greedy",
        }
    }
}

impl FromStr for SelectorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Ok(Self::Uniform),
            "greedy" | "heuristic" => Ok(Self::Greedy),
            other => Err(ConfigError::Invalid(format!("unknown selector: {other}"))),
        }
    }
}

/// Picks one direction out of a non-empty safe set.
pub trait MoveSelector {
    /// Label used in logs.
    fn name(&self) -> &'static str;

    /// Choose among `safe`. Returns `None` only when `safe` is empty.
    fn select(
        &self,
        world: &WorldState,
        me: &Snake,
        safe: &[Direction],
        rng: &mut dyn RandomSource,
    ) -> Option<Direction>;
}

/// Build the selector named by `kind`.
pub fn build_selector(kind: SelectorKind) -> Box<dyn MoveSelector> {
    match kind {
        SelectorKind::Uniform => Box::new(UniformSelector),
        SelectorKind::Greedy => Box::new(GreedySelector::with_weights(GreedyWeights::default())),
    }
}

// ---------------------------------------------------------------------------
// Uniform
// ---------------------------------------------------------------------------

/// Uniform draw over the safe set.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl MoveSelector for UniformSelector {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn select(
        &self,
        _world: &WorldState,
        _me: &Snake,
        safe: &[Direction],
        rng: &mut dyn RandomSource,
    ) -> Option<Direction> {
        rng.pick_direction(safe)
    }
}

// ---------------------------------------------------------------------------
// Greedy
// ---------------------------------------------------------------------------

/// Scores within this margin count as tied.
const TIE_EPSILON: f64 = 1e-9;

/// Weights for [`GreedySelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyWeights {
    /// Multiplier on `value / (distance + 1)` for the best reachable prize.
    pub prize: f64,
    /// Value assigned to a growth bean.
    pub growth_bean_value: f64,
    /// Value assigned to a ground key when the agent holds none.
    pub key_value: f64,
    /// Penalty for stepping onto a trap.
    pub trap: f64,
    /// Penalty per trap orthogonally adjacent to the target cell.
    pub trap_adjacent: f64,
    /// Penalty scaled by `1 / (distance + 1)` for each rival head.
    pub rival_head: f64,
    /// Penalty for a target currently holding a rival head.
    pub head_on: f64,
    /// Penalty for a target outside the current safe zone.
    pub outside_zone: f64,
    /// Penalty for a target outside the next scheduled zone.
    pub outside_next_zone: f64,
    /// Bonus per safe onward neighbour of the target.
    pub mobility: f64,
    /// Penalty for a target with no safe onward neighbour.
    pub dead_end: f64,
}

impl Default for GreedyWeights {
    fn default() -> Self {
        Self {
            prize: 10.0,
            growth_bean_value: 2.0,
            key_value: 6.0,
            trap: 12.0,
            trap_adjacent: 1.5,
            rival_head: 8.0,
            head_on: 15.0,
            outside_zone: 40.0,
            outside_next_zone: 4.0,
            mobility: 1.0,
            dead_end: 25.0,
        }
    }
}

/// Heuristic selector: highest score wins, ties drawn uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector {
    weights: GreedyWeights,
}

impl GreedySelector {
    /// A selector with custom weights.
    pub const fn with_weights(weights: GreedyWeights) -> Self {
        Self { weights }
    }

    /// Heuristic value of moving `me` into `target`.
    pub fn score(&self, world: &WorldState, me: &Snake, target: Position) -> f64 {
        let w = &self.weights;
        let mut score = w.prize * best_prize(world, me, target, w);

        if let Some(item) = world.object_at(target)
            && item.is_trap()
        {
            score -= w.trap;
        }
        let adjacent_traps = target
            .neighbours()
            .iter()
            .filter(|(_, cell)| world.object_at(*cell).is_some_and(Item::is_trap))
            .count();
        score -= w.trap_adjacent * count_as_f64(adjacent_traps);

        if world.has_head_at(target) {
            score -= w.head_on;
        }
        for head in world.other_heads(me.id) {
            score -= w.rival_head / (f64::from(target.manhattan_distance(head)) + 1.0);
        }

        if !world.in_safe_zone(target) {
            score -= w.outside_zone;
        }
        if let Some(zone) = world.safe_zone()
            && zone.next.tick.is_some()
            && !zone.next.bounds.contains(target)
        {
            score -= w.outside_next_zone;
        }

        let onward = target
            .neighbours()
            .iter()
            .filter(|(_, cell)| me.head() != Some(*cell) && world.is_safe_position(*cell))
            .count();
        if onward == 0 {
            score -= w.dead_end;
        }
        score += w.mobility * count_as_f64(onward);

        score
    }
}

impl MoveSelector for GreedySelector {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(
        &self,
        world: &WorldState,
        me: &Snake,
        safe: &[Direction],
        rng: &mut dyn RandomSource,
    ) -> Option<Direction> {
        let head = me.head()?;
        let scored: Vec<(Direction, f64)> = safe
            .iter()
            .map(|&d| (d, self.score(world, me, head.offset(d))))
            .collect();
        let best = scored
            .iter()
            .map(|&(_, s)| s)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<Direction> = scored
            .iter()
            .filter(|&&(_, s)| (best - s).abs() <= TIE_EPSILON)
            .map(|&(d, _)| d)
            .collect();
        debug!(?scored, ?tied, "greedy scores");
        rng.pick_direction(&tied)
    }
}

/// Largest `value / (distance + 1)` over everything worth collecting.
fn best_prize(world: &WorldState, me: &Snake, target: Position, w: &GreedyWeights) -> f64 {
    let holding_key = me.has_key == Some(true)
        || world.keys().iter().any(|k| k.holder() == Some(me.id));
    let reach = |pos: Position, value: f64| value / (f64::from(target.manhattan_distance(pos)) + 1.0);

    let items = world
        .items()
        .iter()
        .filter(|item| item.is_edible())
        .map(|item| {
            let value = match item.kind() {
                ItemKind::Food(v) => f64::from(v),
                _ => w.growth_bean_value,
            };
            reach(item.position, value)
        });
    let chests = world
        .chests()
        .iter()
        .filter(|_| holding_key)
        .map(|c| reach(c.position, f64::from(c.score)));
    let keys = world
        .keys()
        .iter()
        .filter(|k| !holding_key && k.holder().is_none())
        .map(|k| reach(k.position, w.key_value));

    items.chain(chests).chain(keys).fold(0.0, f64::max)
}

fn count_as_f64(n: usize) -> f64 {
    f64::from(u32::try_from(n).unwrap_or(u32::MAX))
}
