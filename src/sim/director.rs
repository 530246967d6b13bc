//! Difficulty director
//!
//! Owns the level clock and all ambient spawning: asteroids drift in from
//! the edges on a shrinking interval, Mikitos join from level 5, and at the
//! boss level the director shuts down for good. It never touches the
//! registries itself; each update reports what should spawn.

use glam::Vec2;

use super::asteroid::AsteroidTier;
use super::rng::GameRng;
use crate::consts::*;
use crate::rotate_deg;

/// Playfield edge an ambient spawn enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    /// Unit vector pointing into the playfield
    pub fn inward(&self) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(1.0, 0.0),
            SpawnEdge::Right => Vec2::new(-1.0, 0.0),
            SpawnEdge::Top => Vec2::new(0.0, 1.0),
            SpawnEdge::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Point `margin` outside this edge, `t` in [0, 1] along it
    pub fn position(&self, t: f32, margin: f32) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(-margin, t * SCREEN_HEIGHT),
            SpawnEdge::Right => Vec2::new(SCREEN_WIDTH + margin, t * SCREEN_HEIGHT),
            SpawnEdge::Top => Vec2::new(t * SCREEN_WIDTH, -margin),
            SpawnEdge::Bottom => Vec2::new(t * SCREEN_WIDTH, SCREEN_HEIGHT + margin),
        }
    }
}

/// A fully-sampled asteroid ready to enter play
#[derive(Debug, Clone, Copy)]
pub struct AsteroidSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
    pub spin: f32,
}

/// What one director update wants created
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorOutput {
    /// Levels gained this frame (normally 0 or 1)
    pub level_ups: u32,
    pub asteroid: Option<AsteroidSpawn>,
    /// Mikito spawn position just outside a horizontal edge
    pub enemy: Option<Vec2>,
}

#[derive(Debug, Clone)]
pub struct Director {
    pub level: u32,
    pub elapsed: f32,
    spawn_timer: f32,
    enemy_timer: f32,
    enemy_from_left: bool,
    /// Set for good at the boss level
    pub stopped: bool,
}

impl Director {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start partway up the difficulty curve (debug level skip)
    pub fn starting_at(level: u32) -> Self {
        let level = level.max(1);
        Self {
            level,
            elapsed: (level - 1) as f32 * LEVEL_UP_INTERVAL,
            spawn_timer: 0.0,
            enemy_timer: 0.0,
            enemy_from_left: true,
            stopped: false,
        }
    }

    /// Interval between asteroid spawn attempts at the current level
    pub fn spawn_interval(&self) -> f32 {
        (ASTEROID_SPAWN_INTERVAL - self.level as f32 * ASTEROID_SPAWN_INTERVAL_STEP)
            .max(ASTEROID_SPAWN_INTERVAL_FLOOR)
    }

    /// Live-asteroid cap at the current level
    pub fn asteroid_cap(&self) -> usize {
        (ASTEROID_BASE_CAP + self.level as usize).min(ASTEROID_CAP_LIMIT)
    }

    fn tier_for_level(&self, rng: &mut GameRng) -> AsteroidTier {
        if self.level < 3 {
            AsteroidTier::Large
        } else if self.level < 5 {
            match rng.index(2) {
                0 => AsteroidTier::Large,
                _ => AsteroidTier::Medium,
            }
        } else {
            match rng.index(3) {
                0 => AsteroidTier::Large,
                1 => AsteroidTier::Medium,
                _ => AsteroidTier::Small,
            }
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        rng: &mut GameRng,
        live_asteroids: usize,
        live_enemies: usize,
        player_pos: Vec2,
    ) -> DirectorOutput {
        let mut out = DirectorOutput::default();
        if self.stopped {
            return out;
        }

        self.elapsed += dt;
        while self.elapsed > self.level as f32 * LEVEL_UP_INTERVAL {
            self.level += 1;
            out.level_ups += 1;
        }
        if self.level >= BOSS_LEVEL {
            self.stopped = true;
            return out;
        }

        // The attempt timer resets even when the cap or the safe-distance
        // check then vetoes the spawn
        self.spawn_timer += dt;
        if self.spawn_timer > self.spawn_interval() {
            self.spawn_timer = 0.0;
            if live_asteroids < self.asteroid_cap() {
                let edge = rng.edge();
                let pos = edge.position(rng.along_edge(), ASTEROID_SPAWN_MARGIN);
                let speed = rng.uniform(
                    ASTEROID_BASE_SPEED_MIN + self.level as f32 * ASTEROID_SPEED_MIN_PER_LEVEL,
                    ASTEROID_BASE_SPEED_MAX + self.level as f32 * ASTEROID_SPEED_MAX_PER_LEVEL,
                );
                let vel = rotate_deg(edge.inward() * speed, rng.deflection());
                let tier = self.tier_for_level(rng);
                let spin = rng.spin();
                if pos.distance(player_pos) >= ASTEROID_SAFE_SPAWN_DIST {
                    out.asteroid = Some(AsteroidSpawn {
                        pos,
                        vel,
                        tier,
                        spin,
                    });
                }
            }
        }

        if self.level >= ENEMY_START_LEVEL {
            self.enemy_timer += dt;
            if self.enemy_timer > ENEMY_SPAWN_INTERVAL {
                self.enemy_timer = 0.0;
                if live_enemies < ENEMY_CAP {
                    let x = if self.enemy_from_left {
                        -MIKITO_RADIUS
                    } else {
                        SCREEN_WIDTH + MIKITO_RADIUS
                    };
                    self.enemy_from_left = !self.enemy_from_left;
                    out.enemy = Some(Vec2::new(x, rng.uniform(0.0, SCREEN_HEIGHT)));
                }
            }
        }

        out
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_levels_track_elapsed() {
        let mut d = Director::new();
        let mut rng = GameRng::new(1);
        let mut total_ups = 0;
        // Drive 61 seconds; levels come at >15, >30, >45, >60
        for _ in 0..(61.0 / DT) as u32 {
            total_ups += d.update(DT, &mut rng, 100, 100, CENTER).level_ups;
            assert!(d.elapsed <= d.level as f32 * LEVEL_UP_INTERVAL);
            assert!(d.level == 1 || d.elapsed > (d.level - 1) as f32 * LEVEL_UP_INTERVAL);
        }
        assert_eq!(d.level, 5);
        assert_eq!(total_ups, 4);
    }

    #[test]
    fn test_spawn_interval_floor() {
        assert!((Director::starting_at(1).spawn_interval() - 0.78).abs() < 1e-5);
        assert!((Director::starting_at(5).spawn_interval() - 0.7).abs() < 1e-5);
        assert!((Director::starting_at(9).spawn_interval() - 0.62).abs() < 1e-5);
        // Level 20 would compute 0.4; the floor holds
        assert_eq!(
            Director::starting_at(20).spawn_interval(),
            ASTEROID_SPAWN_INTERVAL_FLOOR
        );
    }

    #[test]
    fn test_asteroid_cap_by_level() {
        assert_eq!(Director::starting_at(1).asteroid_cap(), 4);
        assert_eq!(Director::starting_at(6).asteroid_cap(), 9);
        assert_eq!(Director::starting_at(7).asteroid_cap(), 10);
        assert_eq!(Director::starting_at(9).asteroid_cap(), 10);
    }

    #[test]
    fn test_spawn_outside_edge_moving_inward() {
        let mut d = Director::new();
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            let out = d.update(0.9, &mut rng, 0, 0, CENTER);
            let spawn = out.asteroid.expect("cap is clear, player is far");
            // Outside the screen by the spawn margin
            assert!(
                spawn.pos.x <= -ASTEROID_SPAWN_MARGIN
                    || spawn.pos.x >= SCREEN_WIDTH + ASTEROID_SPAWN_MARGIN
                    || spawn.pos.y <= -ASTEROID_SPAWN_MARGIN
                    || spawn.pos.y >= SCREEN_HEIGHT + ASTEROID_SPAWN_MARGIN
            );
            // Deflection keeps the inward component positive
            let inward = if spawn.pos.x < 0.0 {
                spawn.vel.x
            } else if spawn.pos.x > SCREEN_WIDTH {
                -spawn.vel.x
            } else if spawn.pos.y < 0.0 {
                spawn.vel.y
            } else {
                -spawn.vel.y
            };
            assert!(inward > 0.0);
            assert!(spawn.spin.abs() <= ASTEROID_MAX_SPIN);
        }
    }

    #[test]
    fn test_spawn_speed_scales_with_level() {
        let mut rng = GameRng::new(7);
        let mut d = Director::starting_at(2);
        for _ in 0..50 {
            if let Some(spawn) = d.update(0.9, &mut rng, 0, 0, CENTER).asteroid {
                // Level-ups land before sampling, so d.level is the one used
                let lo = ASTEROID_BASE_SPEED_MIN + d.level as f32 * ASTEROID_SPEED_MIN_PER_LEVEL;
                let hi = ASTEROID_BASE_SPEED_MAX + d.level as f32 * ASTEROID_SPEED_MAX_PER_LEVEL;
                let speed = spawn.vel.length();
                assert!(speed >= lo - 1e-3 && speed <= hi + 1e-3);
            }
        }
    }

    #[test]
    fn test_tier_bands() {
        let mut rng = GameRng::new(7);

        let mut low = Director::new();
        for _ in 0..30 {
            if let Some(s) = low.update(0.9, &mut rng, 0, 0, CENTER).asteroid {
                assert_eq!(s.tier, AsteroidTier::Large);
            }
        }
        assert!(low.level < 3);

        // 20 calls keeps elapsed short of the level 5 threshold
        let mut mid = Director::starting_at(4);
        for _ in 0..20 {
            if let Some(s) = mid.update(0.73, &mut rng, 0, 0, CENTER).asteroid {
                assert_ne!(s.tier, AsteroidTier::Small);
            }
        }
        assert_eq!(mid.level, 4);

        let mut high = Director::starting_at(6);
        let mut seen_small = false;
        for _ in 0..200 {
            if let Some(s) = high.update(0.69, &mut rng, 0, 0, CENTER).asteroid {
                seen_small |= s.tier == AsteroidTier::Small;
            }
        }
        assert!(seen_small);
    }

    #[test]
    fn test_cap_blocks_spawn() {
        let mut d = Director::new();
        let mut rng = GameRng::new(7);
        let out = d.update(0.9, &mut rng, d.asteroid_cap(), 0, CENTER);
        assert!(out.asteroid.is_none());
    }

    #[test]
    fn test_safe_distance_rejects_silently() {
        let mut d = Director::new();
        let mut rng = GameRng::new(7);
        // Park the player just outside the left edge so mid-height left
        // spawns land within the safe distance
        let player = Vec2::new(-ASTEROID_SPAWN_MARGIN + 1.0, 360.0);
        let mut accepted = 0;
        let mut rejected = 0;
        // 140 calls keeps the level below the boss cutoff
        for _ in 0..140 {
            let out = d.update(0.9, &mut rng, 0, 0, player);
            if let Some(s) = out.asteroid {
                assert!(s.pos.distance(player) >= ASTEROID_SAFE_SPAWN_DIST);
                accepted += 1;
            } else {
                rejected += 1;
            }
        }
        assert!(!d.stopped);
        assert!(accepted > 0 && rejected > 0);
    }

    #[test]
    fn test_enemies_from_level_five_alternating() {
        let mut rng = GameRng::new(7);

        // Below the threshold the enemy clock never even runs
        let mut low = Director::starting_at(4);
        for _ in 0..29 {
            assert!(low.update(0.5, &mut rng, 100, 0, CENTER).enemy.is_none());
        }
        assert_eq!(low.level, 4);

        let mut d = Director::starting_at(5);
        let mut sides = Vec::new();
        for _ in 0..300 {
            if let Some(pos) = d.update(0.5, &mut rng, 100, 0, CENTER).enemy {
                assert!(pos.x == -MIKITO_RADIUS || pos.x == SCREEN_WIDTH + MIKITO_RADIUS);
                assert!((0.0..=SCREEN_HEIGHT).contains(&pos.y));
                sides.push(pos.x < 0.0);
            }
        }
        assert!(sides.len() >= 2);
        // Strict alternation, starting from the left
        assert!(sides[0]);
        for pair in sides.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_enemy_cap() {
        let mut rng = GameRng::new(7);
        let mut d = Director::starting_at(5);
        for _ in 0..100 {
            assert!(d.update(0.5, &mut rng, 100, ENEMY_CAP, CENTER).enemy.is_none());
        }
    }

    #[test]
    fn test_stops_for_good_at_boss_level() {
        let mut rng = GameRng::new(7);
        let mut d = Director::starting_at(9);
        // 16 seconds pushes past level 10
        let mut stopped_frame_ups = 0;
        for _ in 0..(16.0 / DT) as u32 {
            stopped_frame_ups += d.update(DT, &mut rng, 0, 0, CENTER).level_ups;
        }
        assert!(d.stopped);
        assert_eq!(d.level, BOSS_LEVEL);
        assert_eq!(stopped_frame_ups, 1);
        // Dead forever after
        let out = d.update(10.0, &mut rng, 0, 0, CENTER);
        assert_eq!(out.level_ups, 0);
        assert!(out.asteroid.is_none() && out.enemy.is_none());
    }
}
