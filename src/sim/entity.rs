//! Core entity record
//!
//! Every entity kind embeds a [`Body`]: position, velocity, collision shape,
//! and an alive flag. Dead bodies stay in their registry until the end of the
//! frame so collision passes can skip them by flag instead of re-indexing
//! mid-pass; `GameState::compact` removes them at the frame boundary.

use glam::Vec2;

use super::shape::{overlaps, Shape};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub alive: bool,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, shape: Shape) -> Self {
        Self {
            id,
            pos,
            vel,
            shape,
            alive: true,
        }
    }

    pub fn circle(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self::new(id, pos, vel, Shape::Circle { radius })
    }

    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Teleport to the opposite edge when a coordinate leaves the screen.
    /// Returns whether anything wrapped. Velocity is untouched, and a
    /// position exactly on a bound stays put.
    pub fn wrap(&mut self) -> bool {
        let mut wrapped = false;
        if self.pos.x < 0.0 {
            self.pos.x = SCREEN_WIDTH;
            wrapped = true;
        } else if self.pos.x > SCREEN_WIDTH {
            self.pos.x = 0.0;
            wrapped = true;
        }
        if self.pos.y < 0.0 {
            self.pos.y = SCREEN_HEIGHT;
            wrapped = true;
        } else if self.pos.y > SCREEN_HEIGHT {
            self.pos.y = 0.0;
            wrapped = true;
        }
        wrapped
    }

    /// Center past the screen bounds extended by `margin` on any side
    pub fn offscreen_by(&self, margin: f32) -> bool {
        self.pos.x < -margin
            || self.pos.x > SCREEN_WIDTH + margin
            || self.pos.y < -margin
            || self.pos.y > SCREEN_HEIGHT + margin
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        overlaps(self.pos, &self.shape, other.pos, &other.shape)
    }

    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
