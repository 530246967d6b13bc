//! Game state and run lifecycle
//!
//! Everything a frame needs lives here: the player, the entity registries,
//! the difficulty director, and the seeded RNG. Registries keep push order,
//! ids ascend, and dead entities linger flagged until [`GameState::compact`]
//! at the frame boundary, so iteration order is stable within a frame.

use glam::Vec2;

use super::asteroid::{Asteroid, SplitPieces};
use super::boss::{Boss, BossBullet};
use super::director::{AsteroidSpawn, Director};
use super::enemy::{Enemy, EnemyBullet};
use super::player::{Player, Shot, ShotSpawn};
use super::rng::{GameRng, next_run_seed};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Intro,
    /// Open field: asteroids and Mikitos under the director
    Playing,
    /// Field cleared, boss gliding in from the right edge
    BossIntro,
    /// Boss duel, player confined to the screen
    BossFight,
    /// Boss destroyed
    Victory,
    /// Out of lives
    Defeat,
}

/// Things that happened during a tick, for sound and logging.
/// Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    /// An asteroid broke into two smaller ones
    AsteroidSplit,
    /// A smallest-tier asteroid was shot (no children)
    AsteroidDestroyed,
    EnemyDestroyed,
    /// A shot intercepted an enemy bullet
    EnemyBulletBlocked,
    /// A cookie bomb ran out of hit points
    CookieDestroyed,
    BossSpawned,
    BossHit,
    BossStageTwo,
    LifeLost,
    /// Player controls inverted by an enemy bullet
    Dizzy,
    LevelUp(u32),
    Victory,
    Defeat,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: GameRng,
    /// Level clock and ambient spawn scheduling
    pub director: Director,
    /// Level the run began at (debug skip; restarts keep it)
    pub start_level: u32,
    pub phase: GamePhase,
    pub score: u32,
    /// Seconds of play so far
    pub time: f32,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub shots: Vec<Shot>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub boss: Option<Boss>,
    pub boss_bullets: Vec<BossBullet>,
    /// Events emitted by the tick in progress
    pub events: Vec<GameEvent>,
    /// Set when the player asks to quit
    pub exit_requested: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::starting_at(seed, 1)
    }

    /// New game partway up the difficulty curve (debug level skip)
    pub fn starting_at(seed: u64, level: u32) -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        Self {
            seed,
            rng: GameRng::new(seed),
            director: Director::starting_at(level),
            start_level: level,
            phase: GamePhase::Intro,
            score: 0,
            time: 0.0,
            // Id 0 is reserved for the player
            player: Player::new(0, center),
            asteroids: Vec::new(),
            shots: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            boss: None,
            boss_bullets: Vec::new(),
            events: Vec::new(),
            exit_requested: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_asteroid(&mut self, spawn: AsteroidSpawn) {
        let id = self.next_entity_id();
        self.asteroids
            .push(Asteroid::new(id, spawn.pos, spawn.vel, spawn.tier, spawn.spin));
    }

    /// Turn a split into two live children, each with its own id and spin
    pub fn spawn_split_children(&mut self, pieces: SplitPieces) {
        for vel in pieces.vels {
            let id = self.next_entity_id();
            let spin = self.rng.spin();
            self.asteroids
                .push(Asteroid::new(id, pieces.pos, vel, pieces.tier, spin));
        }
    }

    pub fn spawn_shot(&mut self, spawn: ShotSpawn) {
        let id = self.next_entity_id();
        self.shots.push(Shot::new(id, spawn.pos, spawn.vel));
    }

    pub fn spawn_enemy(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        let enemy = Enemy::new(id, pos, &mut self.rng);
        self.enemies.push(enemy);
    }

    pub fn spawn_enemy_bullet(&mut self, pos: Vec2, vel: Vec2) {
        let id = self.next_entity_id();
        self.enemy_bullets.push(EnemyBullet::new(id, pos, vel));
    }

    pub fn spawn_boss(&mut self) {
        let id = self.next_entity_id();
        self.boss = Some(Boss::new(id));
    }

    pub fn spawn_bone(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.boss_bullets.push(BossBullet::bone(id, pos));
    }

    pub fn spawn_cookie(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.boss_bullets.push(BossBullet::cookie(id, pos));
    }

    /// Drop everything flagged dead. Runs once per tick, after all
    /// collision passes, so indices stay valid mid-frame.
    pub fn compact(&mut self) {
        self.asteroids.retain(|a| a.body.alive);
        self.shots.retain(|s| s.body.alive);
        self.enemies.retain(|e| e.body.alive);
        self.enemy_bullets.retain(|b| b.body.alive);
        self.boss_bullets.retain(|b| b.body.alive);
        if matches!(&self.boss, Some(b) if !b.body.alive) {
            self.boss = None;
        }
    }

    /// Fresh run on a successor seed. Debug god mode survives the restart;
    /// everything else starts over.
    pub fn reset(&mut self) {
        let god_mode = self.player.god_mode;
        *self = GameState::starting_at(next_run_seed(self.seed), self.start_level);
        self.player.god_mode = god_mode;
    }
}
