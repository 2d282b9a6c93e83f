//! Injectable randomness.
//!
//! The decision ladder never touches a global generator. It draws through
//! [`RandomSource`], so production runs use a seeded or OS-seeded
//! [`RngSource`] while tests script exact draws.

use rand::distr::Bernoulli;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use snakebot_types::Direction;

/// A source of uniform draws.
pub trait RandomSource {
    /// A uniform integer in `0..upper`, or `None` when `upper` is zero.
    fn below(&mut self, upper: usize) -> Option<usize>;

    /// `true` with the given probability. Probabilities outside `[0, 1]`
    /// never succeed.
    fn chance(&mut self, probability: f64) -> bool;

    /// A uniform draw from `set`, or `None` when it is empty.
    fn pick_direction(&mut self, set: &[Direction]) -> Option<Direction> {
        let index = self.below(set.len())?;
        set.get(index).copied()
    }

    /// A uniform draw over all four directions.
    fn any_direction(&mut self) -> Direction {
        self.pick_direction(&Direction::ALL)
            .unwrap_or(Direction::Right)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap a generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// A reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// A source seeded from operating-system entropy.
    pub fn from_os_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> Option<usize> {
        (upper > 0).then(|| self.rng.random_range(0..upper))
    }

    fn chance(&mut self, probability: f64) -> bool {
        Bernoulli::new(probability).is_ok_and(|coin| self.rng.sample(coin))
    }
}
