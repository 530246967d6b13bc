//! Asteroids: size tiers, drift, wrap budget, splitting

use glam::Vec2;

use super::entity::Body;
use super::rng::GameRng;
use crate::consts::*;
use crate::rotate_deg;

/// Size tiers, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Collision radius: base radius times the tier multiplier
    pub fn radius(&self) -> f32 {
        let multiplier = match self {
            AsteroidTier::Large => 5.0,
            AsteroidTier::Medium => 2.0,
            AsteroidTier::Small => 1.0,
        };
        ASTEROID_MIN_RADIUS * multiplier
    }

    /// Score for shooting this tier (smaller is worth more)
    pub fn score(&self) -> u32 {
        match self {
            AsteroidTier::Large => 20,
            AsteroidTier::Medium => 50,
            AsteroidTier::Small => 100,
        }
    }

    /// Tier a split produces, if any
    pub fn smaller(&self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

/// Material for the two children of a split, minus per-child samples
#[derive(Debug, Clone)]
pub struct SplitPieces {
    pub tier: AsteroidTier,
    pub pos: Vec2,
    /// Child velocities: parent velocity deflected +angle then -angle
    pub vels: [Vec2; 2],
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub tier: AsteroidTier,
    /// Current facing, degrees (drawn, never collided)
    pub rotation: f32,
    /// Degrees per second
    pub spin: f32,
    /// Wraps survived so far
    pub wraps: u8,
}

impl Asteroid {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, tier: AsteroidTier, spin: f32) -> Self {
        Self {
            body: Body::circle(id, pos, vel, tier.radius()),
            tier,
            rotation: 0.0,
            spin,
            wraps: 0,
        }
    }

    /// Drift, tumble, and wrap. The wrap counter moves only on a real wrap,
    /// and spending the whole budget kills the asteroid on the spot with no
    /// split.
    pub fn update(&mut self, dt: f32) {
        self.rotation += self.spin * dt;
        self.body.integrate(dt);
        if self.body.wrap() {
            self.wraps += 1;
            if self.wraps >= ASTEROID_MAX_WRAPS {
                self.body.kill();
            }
        }
    }

    /// Kill this asteroid and describe its children, if it has any.
    ///
    /// Splitting an already-dead asteroid is a no-op, and the smallest tier
    /// dies childless. One deflection angle in the split range steers both
    /// children: the parent velocity rotated either way and scaled up.
    pub fn split(&mut self, rng: &mut GameRng) -> Option<SplitPieces> {
        if !self.body.alive {
            return None;
        }
        self.body.kill();

        let tier = self.tier.smaller()?;
        let angle = rng.split_angle();
        let vels = [
            rotate_deg(self.body.vel, angle) * ASTEROID_SPLIT_SPEED_SCALE,
            rotate_deg(self.body.vel, -angle) * ASTEROID_SPLIT_SPEED_SCALE,
        ];
        Some(SplitPieces {
            tier,
            pos: self.body.pos,
            vels,
        })
    }
}
