//! Fixed timestep simulation tick
//!
//! Core frame pipeline that advances the game deterministically: phase
//! machine, entity updates, ordered collision passes, then lifecycle.
//! Entities created during a frame are staged in local buffers and join the
//! registries only after the collision passes, so nothing spawned this frame
//! is collided until the next one.

use glam::Vec2;

use super::asteroid::SplitPieces;
use super::boss::BossBulletKind;
use super::director::AsteroidSpawn;
use super::player::Controls;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Held-key snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Leave the title screen
    pub confirm: bool,
    /// New run from the victory/defeat screen
    pub restart: bool,
    /// Ask the shell to close
    pub quit: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.quit {
        state.exit_requested = true;
    }

    match state.phase {
        GamePhase::Intro => {
            if input.confirm {
                state.phase = GamePhase::Playing;
                log::info!(
                    "run started: seed {}, level {}",
                    state.seed,
                    state.director.level
                );
            }
            return;
        }
        GamePhase::Victory | GamePhase::Defeat => {
            if input.restart {
                state.reset();
                log::info!("restarting with seed {}", state.seed);
            }
            return;
        }
        GamePhase::Playing | GamePhase::BossIntro | GamePhase::BossFight => {}
    }

    if dt <= 0.0 {
        return;
    }

    // Boss arrival: the director has stopped, the field clears, and the
    // player trades wrapping for hard screen bounds
    if state.phase == GamePhase::Playing && state.director.level >= BOSS_LEVEL {
        state.asteroids.clear();
        state.enemies.clear();
        state.enemy_bullets.clear();
        state.player.bounded = true;
        state.spawn_boss();
        state.events.push(GameEvent::BossSpawned);
        state.phase = GamePhase::BossIntro;
        log::info!("boss incoming at score {}", state.score);
    }
    if state.phase == GamePhase::BossIntro
        && matches!(&state.boss, Some(b) if b.in_position())
    {
        state.phase = GamePhase::BossFight;
        log::debug!("boss in position");
    }

    state.time += dt;

    // ---- Update pass: everything new lands in staging buffers ----

    let controls = Controls {
        left: input.left,
        right: input.right,
        thrust: input.thrust,
        fire: input.fire,
    };
    let staged_shot = state.player.update(controls, dt);
    if staged_shot.is_some() {
        state.events.push(GameEvent::ShotFired);
    }
    let player_pos = state.player.body.pos;

    for asteroid in &mut state.asteroids {
        asteroid.update(dt);
    }
    for shot in &mut state.shots {
        shot.update(dt);
    }

    let mut enemy_shots: Vec<(Vec2, Vec2)> = Vec::new();
    for enemy in &mut state.enemies {
        if let Some(vel) = enemy.update(dt, player_pos, &mut state.rng) {
            enemy_shots.push((enemy.body.pos, vel));
        }
    }
    for bullet in &mut state.enemy_bullets {
        bullet.update(dt);
    }

    let mut bones: Vec<Vec2> = Vec::new();
    let mut cookies: Vec<Vec2> = Vec::new();
    let mut mikitos: Vec<Vec2> = Vec::new();
    if let Some(boss) = &mut state.boss {
        let emissions = boss.update(dt, &mut state.rng);
        if emissions.stage_two {
            state.events.push(GameEvent::BossStageTwo);
            log::info!("boss enters stage 2 at {} health", boss.health);
        }
        if emissions.bone {
            bones.push(boss.bone_muzzle());
        }
        if emissions.cookie {
            cookies.push(boss.cookie_muzzle());
        }
        if emissions.spawn_mikito {
            mikitos.push(boss.mikito_spawn_pos());
        }
    }
    for bullet in &mut state.boss_bullets {
        bullet.update(dt);
    }

    let mut field_spawns: Vec<AsteroidSpawn> = Vec::new();
    if state.phase == GamePhase::Playing {
        let live_asteroids = state.asteroids.iter().filter(|a| a.body.alive).count();
        let output = state.director.update(
            dt,
            &mut state.rng,
            live_asteroids,
            state.enemies.len(),
            player_pos,
        );
        if output.level_ups > 0 {
            state.events.push(GameEvent::LevelUp(state.director.level));
            log::info!("level {} at {:.1}s", state.director.level, state.time);
        }
        if let Some(spawn) = output.asteroid {
            log::debug!("asteroid spawn at {:?}", spawn.pos);
            field_spawns.push(spawn);
        }
        if let Some(pos) = output.enemy {
            log::debug!("mikito spawn at {:?}", pos);
            mikitos.push(pos);
        }
    }

    // ---- Collision passes, fixed order, alive-guarded ----
    let mut split_spawns: Vec<SplitPieces> = Vec::new();

    // 1. Player vs asteroids: the asteroid always loses unless the player
    //    is in the post-hit grace period
    for i in 0..state.asteroids.len() {
        if !state.asteroids[i].body.alive {
            continue;
        }
        if !state.asteroids[i].body.overlaps(&state.player.body) {
            continue;
        }
        if state.player.invincible() {
            let source = state.asteroids[i].body.pos;
            state.player.push_back_from(source);
            continue;
        }
        state.asteroids[i].body.kill();
        damage_player(state);
    }

    // 2. Player vs boss bullets
    for i in 0..state.boss_bullets.len() {
        if state.player.invincible() || state.player.god_mode {
            break;
        }
        if !state.boss_bullets[i].body.alive {
            continue;
        }
        if !state.boss_bullets[i].body.overlaps(&state.player.body) {
            continue;
        }
        state.boss_bullets[i].body.kill();
        damage_player(state);
    }

    // 3. Player vs enemy bullets: dizzy, never damage, grace period or not
    for i in 0..state.enemy_bullets.len() {
        if !state.enemy_bullets[i].body.alive {
            continue;
        }
        if !state.enemy_bullets[i].body.overlaps(&state.player.body) {
            continue;
        }
        state.enemy_bullets[i].body.kill();
        state.player.apply_dizzy();
        state.events.push(GameEvent::Dizzy);
    }

    // 4. Player vs boss: shoved during the grace period, a life lost outside it
    let mut boss_contact = None;
    if let Some(boss) = &state.boss {
        if boss.body.alive && boss.body.overlaps(&state.player.body) {
            boss_contact = Some(boss.body.pos);
        }
    }
    if let Some(source) = boss_contact {
        if state.player.invincible() {
            state.player.push_back_from(source);
        } else {
            damage_player(state);
        }
    }

    // 5. Shots vs asteroids: first match wins per shot
    for s in 0..state.shots.len() {
        if !state.shots[s].body.alive {
            continue;
        }
        for a in 0..state.asteroids.len() {
            if !state.asteroids[a].body.alive {
                continue;
            }
            if !state.asteroids[a].body.overlaps(&state.shots[s].body) {
                continue;
            }
            state.shots[s].body.kill();
            state.score += state.asteroids[a].tier.score();
            if let Some(pieces) = state.asteroids[a].split(&mut state.rng) {
                split_spawns.push(pieces);
                state.events.push(GameEvent::AsteroidSplit);
            } else {
                state.events.push(GameEvent::AsteroidDestroyed);
            }
            break;
        }
    }

    // 6. Player vs enemies: Mikito contact is harmless, both survive
    for i in 0..state.enemies.len() {
        if !state.enemies[i].body.alive {
            continue;
        }
        if !state.enemies[i].body.overlaps(&state.player.body) {
            continue;
        }
        let source = state.enemies[i].body.pos;
        state.player.push_back_from(source);
    }

    // 7. Shots vs enemies
    for s in 0..state.shots.len() {
        if !state.shots[s].body.alive {
            continue;
        }
        for e in 0..state.enemies.len() {
            if !state.enemies[e].body.alive {
                continue;
            }
            if !state.enemies[e].body.overlaps(&state.shots[s].body) {
                continue;
            }
            state.shots[s].body.kill();
            state.enemies[e].body.kill();
            state.score += SCORE_MIKITO;
            state.events.push(GameEvent::EnemyDestroyed);
            break;
        }
    }

    // 8. Shots vs enemy bullets
    for s in 0..state.shots.len() {
        if !state.shots[s].body.alive {
            continue;
        }
        for b in 0..state.enemy_bullets.len() {
            if !state.enemy_bullets[b].body.alive {
                continue;
            }
            if !state.enemy_bullets[b].body.overlaps(&state.shots[s].body) {
                continue;
            }
            state.shots[s].body.kill();
            state.enemy_bullets[b].body.kill();
            state.events.push(GameEvent::EnemyBulletBlocked);
            break;
        }
    }

    // 9. Shots vs boss bullets: cookies absorb shots, bones shrug them off
    for s in 0..state.shots.len() {
        if !state.shots[s].body.alive {
            continue;
        }
        for b in 0..state.boss_bullets.len() {
            if !state.boss_bullets[b].body.alive {
                continue;
            }
            if !state.boss_bullets[b].body.overlaps(&state.shots[s].body) {
                continue;
            }
            if matches!(state.boss_bullets[b].kind, BossBulletKind::Bone { .. }) {
                continue;
            }
            state.shots[s].body.kill();
            if let BossBulletKind::Cookie { hits } = &mut state.boss_bullets[b].kind {
                *hits = hits.saturating_sub(1);
                if *hits == 0 {
                    state.boss_bullets[b].body.kill();
                    state.events.push(GameEvent::CookieDestroyed);
                }
            }
            break;
        }
    }

    // 10. Shots vs boss
    if let Some(boss) = &mut state.boss {
        for s in 0..state.shots.len() {
            if !boss.body.alive {
                break;
            }
            if !state.shots[s].body.alive {
                continue;
            }
            if !state.shots[s].body.overlaps(&boss.body) {
                continue;
            }
            state.shots[s].body.kill();
            boss.take_damage(SHOT_BOSS_DAMAGE);
            state.score += SCORE_BOSS_HIT;
            state.events.push(GameEvent::BossHit);
            if !boss.body.alive {
                state.phase = GamePhase::Victory;
                state.events.push(GameEvent::Victory);
                log::info!("boss destroyed, final score {}", state.score);
            }
        }
    }

    // ---- Lifecycle: drain staging, then drop the dead ----
    if let Some(spawn) = staged_shot {
        state.spawn_shot(spawn);
    }
    for spawn in field_spawns {
        state.spawn_asteroid(spawn);
    }
    for pieces in split_spawns {
        state.spawn_split_children(pieces);
    }
    for (pos, vel) in enemy_shots {
        state.spawn_enemy_bullet(pos, vel);
    }
    for pos in bones {
        state.spawn_bone(pos);
    }
    for pos in cookies {
        state.spawn_cookie(pos);
    }
    for pos in mikitos {
        state.spawn_enemy(pos);
    }

    state.compact();
}

/// Life loss bookkeeping shared by the damage passes. Nothing happens in
/// god mode or once the run is already lost.
fn damage_player(state: &mut GameState) {
    if state.player.god_mode || state.phase == GamePhase::Defeat {
        return;
    }
    state.events.push(GameEvent::LifeLost);
    if state.player.lose_life() {
        state.phase = GamePhase::Defeat;
        state.events.push(GameEvent::Defeat);
        log::info!(
            "defeated at level {} with score {}",
            state.director.level,
            state.score
        );
    }
}
