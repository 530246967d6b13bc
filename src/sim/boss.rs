//! Two-stage final boss and its projectiles
//!
//! The boss enters from the right edge, bounces vertically, and fires bone
//! bullets on a timer. Dropping to half health triggers a short shaking
//! transition into stage 2: faster movement, cookie bombs, and Mikito
//! reinforcements. Emissions are reported to the caller, which owns bullet
//! and enemy creation.

use glam::Vec2;

use super::entity::Body;
use super::rng::GameRng;
use super::shape::Shape;
use crate::consts::*;
use crate::normalize_deg;

/// What a boss update asks the orchestrator to create
#[derive(Debug, Clone, Copy, Default)]
pub struct BossEmissions {
    pub bone: bool,
    pub cookie: bool,
    pub spawn_mikito: bool,
    /// Set on the frame the stage-2 transition completes
    pub stage_two: bool,
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub body: Body,
    pub health: i32,
    pub stage: u8,
    /// Bone cadence clock
    pub fire_timer: f32,
    /// Mikito reinforcement clock (stage 2)
    pub spawn_timer: f32,
    pub transitioning: bool,
    pub transition_timer: f32,
    /// Latch: the stage-2 transition runs exactly once
    stage2_triggered: bool,
    /// Vertical bounce direction, +1 down / -1 up
    pub direction: f32,
    pub speed_y: f32,
}

impl Boss {
    /// Spawn just past the right edge, vertically centered
    pub fn new(id: u32) -> Self {
        let pos = Vec2::new(SCREEN_WIDTH + BOSS_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        Self {
            body: Body::new(
                id,
                pos,
                Vec2::ZERO,
                Shape::Rect {
                    width: BOSS_WIDTH,
                    height: BOSS_HEIGHT,
                },
            ),
            health: BOSS_HEALTH,
            stage: 1,
            fire_timer: 0.0,
            spawn_timer: 0.0,
            transitioning: false,
            transition_timer: 0.0,
            stage2_triggered: false,
            direction: 1.0,
            speed_y: BOSS_SPEED_Y,
        }
    }

    /// Done gliding in from the right edge
    #[inline]
    pub fn in_position(&self) -> bool {
        self.body.pos.x <= BOSS_ENTRY_X
    }

    pub fn update(&mut self, dt: f32, rng: &mut GameRng) -> BossEmissions {
        let mut out = BossEmissions::default();
        if !self.body.alive {
            return out;
        }

        // Transition: shake in place, no movement or firing, then stage 2
        if self.transitioning {
            self.transition_timer += dt;
            if self.transition_timer > BOSS_TRANSITION_TIME {
                self.transitioning = false;
                self.stage = 2;
                self.speed_y *= BOSS_STAGE2_SPEED_SCALE;
                out.stage_two = true;
            } else {
                self.body.pos += Vec2::splat(rng.shake());
                return out;
            }
        }

        // Vertical bounce within the band
        self.body.pos.y += self.speed_y * self.direction * dt;
        let upper = BOSS_BOUNCE_MARGIN;
        let lower = SCREEN_HEIGHT - BOSS_BOUNCE_MARGIN;
        if self.body.pos.y < upper {
            self.body.pos.y = upper;
            self.direction = 1.0;
        } else if self.body.pos.y > lower {
            self.body.pos.y = lower;
            self.direction = -1.0;
        }

        // Entry glide toward the fighting position
        if self.body.pos.x > BOSS_ENTRY_X {
            self.body.pos.x -= BOSS_ENTRY_SPEED * dt;
        }

        self.fire_timer += dt;
        self.spawn_timer += dt;

        if self.health <= BOSS_STAGE2_HEALTH && !self.stage2_triggered {
            self.stage2_triggered = true;
            self.transitioning = true;
            self.transition_timer = 0.0;
        }

        if self.fire_timer > BONE_INTERVAL {
            self.fire_timer = 0.0;
            out.bone = true;
        }

        if self.stage == 2 {
            if rng.chance(COOKIE_CHANCE) {
                out.cookie = true;
            }
            if self.spawn_timer > BOSS_MIKITO_INTERVAL {
                self.spawn_timer = 0.0;
                out.spawn_mikito = true;
            }
        }

        out
    }

    /// Deactivates (dies) at zero health
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.body.kill();
        }
    }

    /// Muzzle for bone bullets
    pub fn bone_muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new(BONE_OFFSET_X, BONE_OFFSET_Y)
    }

    /// Muzzle for cookie bombs
    pub fn cookie_muzzle(&self) -> Vec2 {
        self.body.pos + Vec2::new(COOKIE_OFFSET_X, COOKIE_OFFSET_Y)
    }

    /// Where requested Mikitos appear
    pub fn mikito_spawn_pos(&self) -> Vec2 {
        self.body.pos + Vec2::new(BOSS_MIKITO_OFFSET_X, 0.0)
    }
}

/// Per-kind data for boss projectiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossBulletKind {
    /// Spins as it flies; immune to shots; dies past either horizontal margin
    Bone { angle: f32, spin: f32 },
    /// Absorbs shots until its hit points run out; dies past the left margin
    Cookie { hits: u8 },
}

#[derive(Debug, Clone)]
pub struct BossBullet {
    pub body: Body,
    pub damage: i32,
    pub kind: BossBulletKind,
}

impl BossBullet {
    pub fn bone(id: u32, pos: Vec2) -> Self {
        Self {
            body: Body::circle(id, pos, Vec2::new(-BONE_SPEED, 0.0), BONE_RADIUS),
            damage: BONE_DAMAGE,
            kind: BossBulletKind::Bone {
                angle: 0.0,
                spin: BONE_SPIN,
            },
        }
    }

    pub fn cookie(id: u32, pos: Vec2) -> Self {
        Self {
            body: Body::circle(id, pos, Vec2::new(-COOKIE_SPEED, 0.0), COOKIE_RADIUS),
            damage: COOKIE_DAMAGE,
            kind: BossBulletKind::Cookie { hits: COOKIE_HITS },
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        match &mut self.kind {
            BossBulletKind::Bone { angle, spin } => {
                *angle = normalize_deg(*angle + *spin * dt);
                if self.body.pos.x < -OFFSCREEN_MARGIN
                    || self.body.pos.x > SCREEN_WIDTH + OFFSCREEN_MARGIN
                {
                    self.body.kill();
                }
            }
            BossBulletKind::Cookie { .. } => {
                if self.body.pos.x < -OFFSCREEN_MARGIN {
                    self.body.kill();
                }
            }
        }
    }
}
