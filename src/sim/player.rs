//! Player ship and its shots
//!
//! Update order matters and is kept exactly as the game defines it: status
//! timers, steering (inverted while dizzy), thrust, speed clamp, integration,
//! friction, firing, invincibility countdown, then bounds handling.

use glam::Vec2;

use super::entity::Body;
use crate::consts::*;
use crate::forward_dir;

/// Held-key snapshot the ship steers by
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// A shot leaving the muzzle this frame
#[derive(Debug, Clone, Copy)]
pub struct ShotSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Facing, degrees; 0 points up and positive turns clockwise on screen
    pub rotation: f32,
    pub lives: u8,
    /// Post-hit grace period; invincible while positive
    pub invincible_timer: f32,
    /// Inverted controls while positive
    pub dizzy_timer: f32,
    /// Seconds until the next shot is allowed
    pub shoot_cooldown: f32,
    /// Hard screen bounds instead of wrapping (boss fight)
    pub bounded: bool,
    /// God mode from debug settings: hits never cost a life
    pub god_mode: bool,
}

impl Player {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            body: Body::circle(id, pos, Vec2::ZERO, PLAYER_RADIUS),
            rotation: 0.0,
            lives: PLAYER_LIVES,
            invincible_timer: 0.0,
            dizzy_timer: 0.0,
            shoot_cooldown: 0.0,
            bounded: false,
            god_mode: false,
        }
    }

    #[inline]
    pub fn invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    #[inline]
    pub fn dizzy(&self) -> bool {
        self.dizzy_timer > 0.0
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        forward_dir(self.rotation)
    }

    /// One frame of ship control. Returns the shot fired this frame, if any.
    pub fn update(&mut self, controls: Controls, dt: f32) -> Option<ShotSpawn> {
        if self.dizzy_timer > 0.0 {
            self.dizzy_timer = (self.dizzy_timer - dt).max(0.0);
        }

        // Dizzy swaps the steering keys
        let (left, right) = if self.dizzy() {
            (controls.right, controls.left)
        } else {
            (controls.left, controls.right)
        };
        if left {
            self.rotation -= PLAYER_TURN_SPEED * dt;
        }
        if right {
            self.rotation += PLAYER_TURN_SPEED * dt;
        }
        if controls.thrust {
            self.body.vel += self.forward() * PLAYER_ACCELERATION * dt;
        }

        self.body.vel = self.body.vel.clamp_length_max(PLAYER_MAX_SPEED);
        self.body.integrate(dt);
        self.body.vel *= PLAYER_FRICTION;

        self.shoot_cooldown -= dt;
        let shot = if controls.fire && self.shoot_cooldown <= 0.0 {
            self.shoot_cooldown = PLAYER_SHOOT_COOLDOWN;
            let forward = self.forward();
            Some(ShotSpawn {
                pos: self.body.pos + forward * PLAYER_RADIUS,
                vel: forward * SHOT_SPEED,
            })
        } else {
            None
        };

        if self.invincible_timer > 0.0 {
            self.invincible_timer = (self.invincible_timer - dt).max(0.0);
        }

        if self.bounded {
            self.enforce_screen_bounds();
        } else {
            self.body.wrap();
        }

        shot
    }

    /// Clamp to the screen, inset by a fraction of the radius, killing the
    /// velocity component that pushed into the wall
    fn enforce_screen_bounds(&mut self) {
        let buffer = PLAYER_RADIUS * PLAYER_BOUNDS_BUFFER;

        if self.body.pos.x < buffer {
            self.body.pos.x = buffer;
            self.body.vel.x = 0.0;
        } else if self.body.pos.x > SCREEN_WIDTH - buffer {
            self.body.pos.x = SCREEN_WIDTH - buffer;
            self.body.vel.x = 0.0;
        }

        if self.body.pos.y < buffer {
            self.body.pos.y = buffer;
            self.body.vel.y = 0.0;
        } else if self.body.pos.y > SCREEN_HEIGHT - buffer {
            self.body.pos.y = SCREEN_HEIGHT - buffer;
            self.body.vel.y = 0.0;
        }
    }

    /// Take a hit. Dizzy clears, and surviving grants the grace period.
    /// Returns true when no lives remain.
    pub fn lose_life(&mut self) -> bool {
        if self.god_mode {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.dizzy_timer = 0.0;

        if self.lives == 0 {
            true
        } else {
            self.invincible_timer = PLAYER_INVINCIBILITY_TIME;
            false
        }
    }

    /// Invert controls for the full duration (re-application restarts it)
    pub fn apply_dizzy(&mut self) {
        self.dizzy_timer = PLAYER_DIZZY_TIME;
    }

    /// Shove away from a contact point
    pub fn push_back_from(&mut self, source: Vec2) {
        let direction = self.body.pos - source;
        if direction.length_squared() > 0.0 {
            self.body.vel += direction.normalize() * PLAYER_PUSHBACK_FORCE;
        }
    }
}

/// Player projectile: straight line, culled off-screen, no wrap
#[derive(Debug, Clone)]
pub struct Shot {
    pub body: Body,
}

impl Shot {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::circle(id, pos, vel, SHOT_RADIUS),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        if self.body.offscreen_by(OFFSCREEN_MARGIN) {
            self.body.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at_center() -> Player {
        Player::new(1, Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0))
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_turn_direction() {
        let mut p = player_at_center();
        p.update(
            Controls {
                right: true,
                ..Default::default()
            },
            0.1,
        );
        assert!((p.rotation - 30.0).abs() < 1e-3);

        p.update(
            Controls {
                left: true,
                ..Default::default()
            },
            0.2,
        );
        assert!((p.rotation - (30.0 - 60.0)).abs() < 1e-3);
    }

    #[test]
    fn test_dizzy_inverts_steering() {
        let mut p = player_at_center();
        p.apply_dizzy();
        assert!(p.dizzy());
        // Holding left while dizzy turns right
        p.update(
            Controls {
                left: true,
                ..Default::default()
            },
            0.1,
        );
        assert!(p.rotation > 0.0);
    }

    #[test]
    fn test_dizzy_expires() {
        let mut p = player_at_center();
        p.apply_dizzy();
        let frames = (PLAYER_DIZZY_TIME / DT).ceil() as u32 + 1;
        for _ in 0..frames {
            p.update(Controls::default(), DT);
        }
        assert!(!p.dizzy());
    }

    #[test]
    fn test_thrust_accelerates_forward() {
        let mut p = player_at_center();
        // Facing up: thrust pushes -y
        p.update(
            Controls {
                thrust: true,
                ..Default::default()
            },
            0.1,
        );
        assert!(p.body.vel.y < 0.0);
        assert!(p.body.vel.x.abs() < 1e-4);
    }

    #[test]
    fn test_speed_clamp() {
        let mut p = player_at_center();
        p.body.vel = Vec2::new(10_000.0, 0.0);
        p.update(Controls::default(), DT);
        // Clamped before integration, friction applies after
        assert!(p.body.vel.length() <= PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_friction_decays_velocity() {
        let mut p = player_at_center();
        p.body.vel = Vec2::new(100.0, 0.0);
        p.update(Controls::default(), DT);
        assert!((p.body.vel.x - 100.0 * PLAYER_FRICTION).abs() < 1e-3);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut p = player_at_center();
        let fire = Controls {
            fire: true,
            ..Default::default()
        };
        assert!(p.update(fire, DT).is_some());
        // Held fire during cooldown produces nothing
        assert!(p.update(fire, DT).is_none());
        let frames = (PLAYER_SHOOT_COOLDOWN / DT).ceil() as u32;
        for _ in 0..frames {
            p.update(Controls::default(), DT);
        }
        assert!(p.update(fire, DT).is_some());
    }

    #[test]
    fn test_shot_leaves_muzzle_forward() {
        let mut p = player_at_center();
        let spawn = p
            .update(
                Controls {
                    fire: true,
                    ..Default::default()
                },
                DT,
            )
            .unwrap();
        // Facing up: muzzle above the center (offset from post-move position),
        // velocity straight up at shot speed
        assert!(spawn.pos.y < p.body.pos.y);
        assert!((spawn.vel.length() - SHOT_SPEED).abs() < 1e-2);
        assert!(spawn.vel.y < 0.0);
    }

    #[test]
    fn test_lose_life_grants_invincibility() {
        let mut p = player_at_center();
        p.apply_dizzy();
        assert!(!p.lose_life());
        assert_eq!(p.lives, PLAYER_LIVES - 1);
        assert!(p.invincible());
        // Dizzy cleared by the hit
        assert!(!p.dizzy());
        assert!((p.invincible_timer - PLAYER_INVINCIBILITY_TIME).abs() < 1e-6);
    }

    #[test]
    fn test_last_life_reports_defeat() {
        let mut p = player_at_center();
        p.lives = 1;
        assert!(p.lose_life());
        assert_eq!(p.lives, 0);
    }

    #[test]
    fn test_god_mode_never_loses_lives() {
        let mut p = player_at_center();
        p.god_mode = true;
        assert!(!p.lose_life());
        assert_eq!(p.lives, PLAYER_LIVES);
    }

    #[test]
    fn test_invincibility_expires_exactly() {
        let mut p = player_at_center();
        p.lose_life();
        // 1.99 seconds in: still protected
        p.update(Controls::default(), 1.99);
        assert!(p.invincible());
        // Past 2.0 seconds: vulnerable again
        p.update(Controls::default(), 0.011);
        assert!(!p.invincible());
    }

    #[test]
    fn test_wrap_when_unbounded() {
        let mut p = player_at_center();
        p.body.pos = Vec2::new(-1.0, 360.0);
        p.update(Controls::default(), 0.0);
        assert_eq!(p.body.pos.x, SCREEN_WIDTH);
    }

    #[test]
    fn test_bounded_clamps_and_zeroes_velocity() {
        let mut p = player_at_center();
        p.bounded = true;
        p.body.pos = Vec2::new(-40.0, 360.0);
        p.body.vel = Vec2::new(-100.0, 50.0);
        p.update(Controls::default(), DT);
        let buffer = PLAYER_RADIUS * PLAYER_BOUNDS_BUFFER;
        assert_eq!(p.body.pos.x, buffer);
        assert_eq!(p.body.vel.x, 0.0);
        // Unclamped axis keeps its velocity (modulo friction)
        assert!(p.body.vel.y > 0.0);
    }

    #[test]
    fn test_pushback_points_away() {
        let mut p = player_at_center();
        let source = p.body.pos + Vec2::new(-10.0, 0.0);
        p.push_back_from(source);
        assert!((p.body.vel.x - PLAYER_PUSHBACK_FORCE).abs() < 1e-4);
        // Coincident source is a no-op
        let mut q = player_at_center();
        q.push_back_from(q.body.pos);
        assert_eq!(q.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_shot_culled_past_margin() {
        let mut s = Shot::new(1, Vec2::new(SCREEN_WIDTH - 1.0, 100.0), Vec2::new(SHOT_SPEED, 0.0));
        s.update(DT);
        assert!(s.body.alive);
        // Keep flying until past the margin
        for _ in 0..20 {
            s.update(DT);
        }
        assert!(!s.body.alive);
    }
}
