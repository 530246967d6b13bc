//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registries are append-only within a frame)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod boss;
pub mod director;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod rng;
pub mod shape;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidTier, SplitPieces};
pub use boss::{Boss, BossBullet, BossBulletKind, BossEmissions};
pub use director::{AsteroidSpawn, Director, DirectorOutput, SpawnEdge};
pub use enemy::{Enemy, EnemyBullet};
pub use entity::Body;
pub use player::{Controls, Player, Shot, ShotSpawn};
pub use rng::{GameRng, next_run_seed};
pub use shape::Shape;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
