//! Frame composition
//!
//! Turns a game state into an ordered list of backend-agnostic draw
//! operations. A platform renderer consumes the list front to back, so ops
//! later in the list paint on top. This module never touches a GPU and is a
//! pure function of state and settings.

use glam::Vec2;

use crate::consts::*;
use crate::rotate_deg;
use crate::settings::Settings;
use crate::sim::asteroid::AsteroidTier;
use crate::sim::boss::BossBulletKind;
use crate::sim::entity::Body;
use crate::sim::shape::Shape;
use crate::sim::state::{GamePhase, GameState};

const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
const SHIP: [f32; 4] = [0.9, 0.95, 1.0, 1.0];
const SHOT: [f32; 4] = [1.0, 0.9, 0.3, 1.0];
const ROCK_LARGE: [f32; 4] = [0.55, 0.52, 0.48, 1.0];
const ROCK_MEDIUM: [f32; 4] = [0.62, 0.59, 0.55, 1.0];
const ROCK_SMALL: [f32; 4] = [0.7, 0.67, 0.63, 1.0];
const MIKITO: [f32; 4] = [0.8, 0.3, 0.9, 1.0];
const MIKITO_BULLET: [f32; 4] = [0.3, 1.0, 0.4, 1.0];
const BOSS_STAGE_ONE: [f32; 4] = [0.85, 0.3, 0.2, 1.0];
const BOSS_STAGE_TWO: [f32; 4] = [0.6, 0.1, 0.1, 1.0];
const BONE: [f32; 4] = [0.95, 0.92, 0.85, 1.0];
const COOKIE: [f32; 4] = [0.7, 0.45, 0.2, 1.0];
const ARENA_WALL: [f32; 4] = [0.5, 0.17, 0.12, 1.0];
const DIZZY_HALO: [f32; 4] = [1.0, 0.85, 0.2, 0.8];
const HITBOX: [f32; 4] = [1.0, 0.2, 0.2, 0.8];
const HUD: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

const BOSS_BAR_SIZE: Vec2 = Vec2::new(400.0, 18.0);
const BOSS_BAR_CENTER: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, 30.0);
const ARENA_WALL_INSET: f32 = 4.0;

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Full-screen clear
    Clear { color: [f32; 4] },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Circle outline
    Ring {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Filled rectangle, rotated about its center
    Rect {
        center: Vec2,
        size: Vec2,
        rotation_deg: f32,
        color: [f32; 4],
    },
    /// Axis-aligned rectangle outline
    RectOutline {
        center: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Filled convex polygon
    Polygon { points: Vec<Vec2>, color: [f32; 4] },
    /// HUD text anchored at its top-left corner
    Text {
        pos: Vec2,
        size: f32,
        color: [f32; 4],
        text: String,
    },
}

/// Everything a backend needs to paint one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub ops: Vec<DrawOp>,
}

fn tier_color(tier: AsteroidTier) -> [f32; 4] {
    match tier {
        AsteroidTier::Large => ROCK_LARGE,
        AsteroidTier::Medium => ROCK_MEDIUM,
        AsteroidTier::Small => ROCK_SMALL,
    }
}

/// Ship triangle: nose along the facing, wings swept back
fn ship_points(pos: Vec2, rotation_deg: f32) -> Vec<Vec2> {
    let forward = crate::forward_dir(rotation_deg);
    vec![
        pos + forward * PLAYER_RADIUS * 1.2,
        pos + rotate_deg(forward, 140.0) * PLAYER_RADIUS,
        pos + rotate_deg(forward, -140.0) * PLAYER_RADIUS,
    ]
}

fn hitbox_op(body: &Body) -> DrawOp {
    match body.shape {
        Shape::Circle { radius } => DrawOp::Ring {
            center: body.pos,
            radius,
            color: HITBOX,
        },
        Shape::Rect { width, height } => DrawOp::RectOutline {
            center: body.pos,
            size: Vec2::new(width, height),
            color: HITBOX,
        },
    }
}

/// Compose the draw list for one frame
pub fn compose_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut ops = vec![DrawOp::Clear { color: BACKGROUND }];

    for asteroid in &state.asteroids {
        ops.push(DrawOp::Circle {
            center: asteroid.body.pos,
            radius: asteroid.tier.radius(),
            color: tier_color(asteroid.tier),
        });
    }

    for enemy in &state.enemies {
        ops.push(DrawOp::Circle {
            center: enemy.body.pos,
            radius: MIKITO_RADIUS,
            color: MIKITO,
        });
    }
    for bullet in &state.enemy_bullets {
        ops.push(DrawOp::Circle {
            center: bullet.body.pos,
            radius: ENEMY_BULLET_RADIUS,
            color: MIKITO_BULLET,
        });
    }

    if let Some(boss) = &state.boss {
        let color = if boss.stage >= 2 {
            BOSS_STAGE_TWO
        } else {
            BOSS_STAGE_ONE
        };
        ops.push(DrawOp::Rect {
            center: boss.body.pos,
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            rotation_deg: 0.0,
            color,
        });
    }

    for bullet in &state.boss_bullets {
        match bullet.kind {
            BossBulletKind::Bone { angle, .. } => {
                ops.push(DrawOp::Rect {
                    center: bullet.body.pos,
                    size: Vec2::new(BONE_RADIUS * 2.0, BONE_RADIUS * 0.6),
                    rotation_deg: angle,
                    color: BONE,
                });
            }
            BossBulletKind::Cookie { .. } => {
                ops.push(DrawOp::Circle {
                    center: bullet.body.pos,
                    radius: COOKIE_RADIUS,
                    color: COOKIE,
                });
            }
        }
    }

    for shot in &state.shots {
        ops.push(DrawOp::Circle {
            center: shot.body.pos,
            radius: SHOT_RADIUS,
            color: SHOT,
        });
    }

    // Grace period blinks the ship at 5 Hz
    let blink_off = state.player.invincible() && (state.time * 10.0) as u32 % 2 == 1;
    if !blink_off {
        ops.push(DrawOp::Polygon {
            points: ship_points(state.player.body.pos, state.player.rotation),
            color: SHIP,
        });
    }
    if state.player.dizzy() {
        ops.push(DrawOp::Ring {
            center: state.player.body.pos,
            radius: PLAYER_RADIUS + 8.0,
            color: DIZZY_HALO,
        });
    }

    // Walls close off the arena while the boss is up
    if state.boss.is_some() {
        ops.push(DrawOp::RectOutline {
            center: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT) - Vec2::splat(ARENA_WALL_INSET * 2.0),
            color: ARENA_WALL,
        });
    }

    hud(state, &mut ops);

    if settings.show_hitboxes {
        ops.push(hitbox_op(&state.player.body));
        for asteroid in &state.asteroids {
            ops.push(hitbox_op(&asteroid.body));
        }
        for shot in &state.shots {
            ops.push(hitbox_op(&shot.body));
        }
        for enemy in &state.enemies {
            ops.push(hitbox_op(&enemy.body));
        }
        for bullet in &state.enemy_bullets {
            ops.push(hitbox_op(&bullet.body));
        }
        if let Some(boss) = &state.boss {
            ops.push(hitbox_op(&boss.body));
        }
        for bullet in &state.boss_bullets {
            ops.push(hitbox_op(&bullet.body));
        }
    }

    Frame { ops }
}

fn hud(state: &GameState, ops: &mut Vec<DrawOp>) {
    ops.push(DrawOp::Text {
        pos: Vec2::new(20.0, 16.0),
        size: 24.0,
        color: HUD,
        text: format!("score {:06}", state.score),
    });
    ops.push(DrawOp::Text {
        pos: Vec2::new(20.0, 48.0),
        size: 24.0,
        color: HUD,
        text: format!("lives {}", state.player.lives),
    });
    ops.push(DrawOp::Text {
        pos: Vec2::new(20.0, 80.0),
        size: 24.0,
        color: HUD,
        text: format!("level {}", state.director.level),
    });

    if let Some(boss) = &state.boss {
        let fraction = (boss.health.max(0) as f32) / BOSS_HEALTH as f32;
        ops.push(DrawOp::Rect {
            center: BOSS_BAR_CENTER,
            size: BOSS_BAR_SIZE,
            rotation_deg: 0.0,
            color: [0.2, 0.2, 0.2, 1.0],
        });
        let fill = BOSS_BAR_SIZE.x * fraction;
        ops.push(DrawOp::Rect {
            center: Vec2::new(
                BOSS_BAR_CENTER.x - (BOSS_BAR_SIZE.x - fill) / 2.0,
                BOSS_BAR_CENTER.y,
            ),
            size: Vec2::new(fill, BOSS_BAR_SIZE.y),
            rotation_deg: 0.0,
            color: BOSS_STAGE_ONE,
        });
    }

    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    match state.phase {
        GamePhase::Intro => {
            ops.push(DrawOp::Text {
                pos: center - Vec2::new(0.0, 40.0),
                size: 64.0,
                color: HUD,
                text: "ASTRO SIEGE".to_string(),
            });
            ops.push(DrawOp::Text {
                pos: center + Vec2::new(0.0, 40.0),
                size: 24.0,
                color: HUD,
                text: "press fire to launch".to_string(),
            });
        }
        GamePhase::Victory => {
            ops.push(DrawOp::Text {
                pos: center,
                size: 64.0,
                color: HUD,
                text: "VICTORY".to_string(),
            });
        }
        GamePhase::Defeat => {
            ops.push(DrawOp::Text {
                pos: center,
                size: 64.0,
                color: HUD,
                text: "GAME OVER".to_string(),
            });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::director::AsteroidSpawn;

    fn base_state() -> GameState {
        let mut state = GameState::new(9);
        state.phase = GamePhase::Playing;
        state
    }

    fn index_of(frame: &Frame, pred: impl Fn(&DrawOp) -> bool) -> usize {
        frame
            .ops
            .iter()
            .position(pred)
            .unwrap_or_else(|| panic!("no matching op in {} ops", frame.ops.len()))
    }

    #[test]
    fn test_frame_opens_with_clear() {
        let frame = compose_frame(&base_state(), &Settings::default());
        assert!(matches!(frame.ops[0], DrawOp::Clear { .. }));
    }

    #[test]
    fn test_ship_paints_over_rocks_and_boss() {
        let mut state = base_state();
        state.spawn_asteroid(AsteroidSpawn {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            tier: AsteroidTier::Large,
            spin: 0.0,
        });
        state.spawn_boss();

        let frame = compose_frame(&state, &Settings::default());
        let rock = index_of(&frame, |op| {
            matches!(op, DrawOp::Circle { radius, .. } if *radius == ASTEROID_MIN_RADIUS * 5.0)
        });
        let boss = index_of(&frame, |op| {
            matches!(op, DrawOp::Rect { size, .. } if size.x == BOSS_WIDTH)
        });
        let ship = index_of(&frame, |op| matches!(op, DrawOp::Polygon { .. }));
        assert!(rock < boss);
        assert!(boss < ship);
    }

    #[test]
    fn test_hitbox_overlay_toggles() {
        let state = base_state();
        let plain = compose_frame(&state, &Settings::default());

        let debug = Settings {
            show_hitboxes: true,
            ..Default::default()
        };
        let outlined = compose_frame(&state, &debug);
        assert!(outlined.ops.len() > plain.ops.len());

        let ring = index_of(&outlined, |op| {
            matches!(op, DrawOp::Ring { radius, color, .. }
                if *radius == PLAYER_RADIUS && *color == HITBOX)
        });
        assert!(ring > 0);
    }

    #[test]
    fn test_hud_shows_score_and_lives() {
        let mut state = base_state();
        state.score = 150;
        let frame = compose_frame(&state, &Settings::default());

        index_of(&frame, |op| {
            matches!(op, DrawOp::Text { text, .. } if text == "score 000150")
        });
        index_of(&frame, |op| {
            matches!(op, DrawOp::Text { text, .. } if text == "lives 5")
        });
    }

    #[test]
    fn test_boss_bar_tracks_health() {
        let mut state = base_state();
        state.spawn_boss();
        if let Some(boss) = &mut state.boss {
            boss.health = BOSS_HEALTH / 2;
        }

        let frame = compose_frame(&state, &Settings::default());
        index_of(&frame, |op| {
            matches!(op, DrawOp::Rect { size, .. }
                if (size.x - BOSS_BAR_SIZE.x / 2.0).abs() < 1e-3 && size.y == BOSS_BAR_SIZE.y)
        });
    }

    #[test]
    fn test_arena_walls_frame_the_boss_fight() {
        let mut state = base_state();
        let plain = compose_frame(&state, &Settings::default());
        assert!(!plain.ops.iter().any(|op| matches!(op, DrawOp::RectOutline { .. })));

        state.spawn_boss();
        let frame = compose_frame(&state, &Settings::default());
        let boss = index_of(&frame, |op| {
            matches!(op, DrawOp::Rect { size, .. } if size.x == BOSS_WIDTH)
        });
        let walls = index_of(&frame, |op| matches!(op, DrawOp::RectOutline { .. }));
        let text = index_of(&frame, |op| matches!(op, DrawOp::Text { .. }));
        // Painted over the fighters, under the HUD
        assert!(boss < walls);
        assert!(walls < text);
    }

    #[test]
    fn test_intro_banner() {
        let state = GameState::new(9);
        let frame = compose_frame(&state, &Settings::default());
        index_of(&frame, |op| {
            matches!(op, DrawOp::Text { text, .. } if text == "ASTRO SIEGE")
        });
    }
}
