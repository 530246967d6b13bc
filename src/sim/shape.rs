//! Collision shapes and overlap tests
//!
//! Every entity collides through one of two shapes, both centered on the
//! owner's position. Overlaps use strict inequality throughout: shapes that
//! touch exactly are not colliding.

use glam::Vec2;

/// Closed set of collision shapes
///
/// The pairing match in [`overlaps`] is total over this enum, so adding a
/// variant forces every dispatch site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box, `width` x `height`, centered on the position
    Rect { width: f32, height: f32 },
}

/// Two circles overlap when their centers are closer than the radius sum
#[inline]
pub fn circles_overlap(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> bool {
    pa.distance(pb) < ra + rb
}

/// Circle vs axis-aligned rect: clamp the center onto the rect per axis and
/// compare the distance to the nearest point against the circle radius
#[inline]
pub fn circle_rect_overlap(pc: Vec2, radius: f32, pr: Vec2, width: f32, height: f32) -> bool {
    let half = Vec2::new(width / 2.0, height / 2.0);
    let nearest = pc.clamp(pr - half, pr + half);
    pc.distance(nearest) < radius
}

/// Axis-aligned rect vs rect overlap (shared edges don't count)
#[inline]
pub fn rects_overlap(pa: Vec2, wa: f32, ha: f32, pb: Vec2, wb: f32, hb: f32) -> bool {
    (pa.x - pb.x).abs() < (wa + wb) / 2.0 && (pa.y - pb.y).abs() < (ha + hb) / 2.0
}

/// Overlap test for any shape pairing
pub fn overlaps(pa: Vec2, sa: &Shape, pb: Vec2, sb: &Shape) -> bool {
    match (*sa, *sb) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circles_overlap(pa, ra, pb, rb)
        }
        (Shape::Circle { radius }, Shape::Rect { width, height }) => {
            circle_rect_overlap(pa, radius, pb, width, height)
        }
        (Shape::Rect { width, height }, Shape::Circle { radius }) => {
            circle_rect_overlap(pb, radius, pa, width, height)
        }
        (
            Shape::Rect {
                width: wa,
                height: ha,
            },
            Shape::Rect {
                width: wb,
                height: hb,
            },
        ) => rects_overlap(pa, wa, ha, pb, wb, hb),
    }
}
