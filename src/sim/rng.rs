//! Seeded random sampling
//!
//! Every random decision in the simulation goes through [`GameRng`] so a run
//! is fully determined by its seed and tests can inject known sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::director::SpawnEdge;
use crate::consts::*;

/// The simulation's only randomness source
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform sample in [lo, hi]
    #[inline]
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        self.rng.random_range(lo..=hi)
    }

    /// Bernoulli trial with probability `p`
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    /// Uniform index in [0, n)
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    /// Asteroid split deflection angle, degrees
    pub fn split_angle(&mut self) -> f32 {
        self.uniform(ASTEROID_SPLIT_ANGLE_MIN, ASTEROID_SPLIT_ANGLE_MAX)
    }

    /// Asteroid spin rate, degrees per second (either direction)
    pub fn spin(&mut self) -> f32 {
        self.uniform(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN)
    }

    /// Deflection off the inward spawn direction, degrees
    pub fn deflection(&mut self) -> f32 {
        self.uniform(-ASTEROID_SPAWN_DEFLECTION, ASTEROID_SPAWN_DEFLECTION)
    }

    /// One of the four playfield edges, uniformly
    pub fn edge(&mut self) -> SpawnEdge {
        match self.index(4) {
            0 => SpawnEdge::Left,
            1 => SpawnEdge::Right,
            2 => SpawnEdge::Top,
            _ => SpawnEdge::Bottom,
        }
    }

    /// Normalized position along an edge
    pub fn along_edge(&mut self) -> f32 {
        self.uniform(0.0, 1.0)
    }

    /// Delay before a Mikito's next shot, seconds
    pub fn shoot_delay(&mut self) -> f32 {
        self.uniform(MIKITO_SHOOT_DELAY_MIN, MIKITO_SHOOT_DELAY_MAX)
    }

    /// Boss transition shake jitter, pixels
    pub fn shake(&mut self) -> f32 {
        self.uniform(-BOSS_SHAKE_AMPLITUDE, BOSS_SHAKE_AMPLITUDE)
    }
}

/// Seed for the run after this one (LCG step, so restarts aren't replays)
#[inline]
pub fn next_run_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
