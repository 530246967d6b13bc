//! Mikito enemy and its poop bullet
//!
//! Mikito chases the player and fires dizzy-inducing bullets on a randomized
//! cadence. Contact with the player never hurts; it only shoves. The bullets
//! carry the dizzy effect, not damage.

use glam::Vec2;

use super::entity::Body;
use super::rng::GameRng;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    /// Seconds until the next shot
    pub shoot_timer: f32,
    /// Drives the side-to-side wobble
    pub wobble_time: f32,
    /// Wobble angle, degrees (drawn, never collided)
    pub rotation: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, rng: &mut GameRng) -> Self {
        Self {
            body: Body::circle(id, pos, Vec2::ZERO, MIKITO_RADIUS),
            shoot_timer: rng.shoot_delay(),
            wobble_time: 0.0,
            rotation: 0.0,
        }
    }

    /// Chase, wobble, wrap, and maybe fire. Returns the bullet velocity when
    /// the cadence timer lapses (aimed at where the player is right now).
    pub fn update(&mut self, dt: f32, player_pos: Vec2, rng: &mut GameRng) -> Option<Vec2> {
        let to_player = player_pos - self.body.pos;
        if to_player.length_squared() > 0.0 {
            self.body.pos += to_player.normalize() * MIKITO_SPEED * dt;
        }

        self.wobble_time += dt;
        self.rotation = MIKITO_WOBBLE_AMPLITUDE * (self.wobble_time * MIKITO_WOBBLE_RATE).sin();

        self.shoot_timer -= dt;
        let shot = if self.shoot_timer <= 0.0 {
            self.shoot_timer = rng.shoot_delay();
            let aim = player_pos - self.body.pos;
            if aim.length_squared() > 0.0 {
                Some(aim.normalize() * ENEMY_BULLET_SPEED)
            } else {
                None
            }
        } else {
            None
        };

        self.body.wrap();
        shot
    }
}

/// Dizzy projectile: applies inverted controls on contact, never damage.
/// Flies straight and dies past the off-screen margin without wrapping.
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    pub body: Body,
}

impl EnemyBullet {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::circle(id, pos, vel, ENEMY_BULLET_RADIUS),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        if self.body.offscreen_by(OFFSCREEN_MARGIN) {
            self.body.kill();
        }
    }
}
