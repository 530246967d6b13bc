//! Astro Siege entry point
//!
//! Headless demo shell: runs the simulation at 60 Hz with a scripted
//! autopilot, routes events to the audio cues, and composes (but does not
//! present) a frame per tick. A windowed backend would replace the autopilot
//! with real input and hand the frames to a renderer.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use astro_siege::audio::{AudioManager, sound_for};
use astro_siege::consts::{FRAME_DT, MAX_FRAME_DT};
use astro_siege::render::compose_frame;
use astro_siege::settings::Settings;
use astro_siege::sim::{GamePhase, GameState, TickInput, tick};

/// Simulated seconds before the demo gives up
const DEMO_SECONDS: f32 = 30.0;

/// Canned input: spin, thrust in bursts, fire constantly
fn autopilot(frame: u64) -> TickInput {
    TickInput {
        confirm: frame == 0,
        right: frame % 90 < 45,
        left: frame % 90 >= 70,
        thrust: frame % 120 < 30,
        fire: frame % 6 == 0,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let audio = AudioManager::from_settings(&settings);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::starting_at(seed, settings.skip_to_level.unwrap_or(1));
    state.player.god_mode = settings.god_mode;
    log::info!("astro-siege starting with seed {}", seed);

    let frame_budget = Duration::from_secs_f32(FRAME_DT);
    let mut previous = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let now = Instant::now();
        let dt = now.duration_since(previous).as_secs_f32().min(MAX_FRAME_DT);
        previous = now;

        let input = autopilot(frame);
        tick(&mut state, &input, dt);
        frame += 1;

        for event in &state.events {
            if let Some(effect) = sound_for(event) {
                audio.play(effect);
            }
        }

        let composed = compose_frame(&state, &settings);
        log::trace!("frame {}: {} draw ops", frame, composed.ops.len());

        if state.exit_requested
            || matches!(state.phase, GamePhase::Victory | GamePhase::Defeat)
            || state.time >= DEMO_SECONDS
        {
            break;
        }

        let spent = now.elapsed();
        if spent < frame_budget {
            thread::sleep(frame_budget - spent);
        }
    }

    log::info!(
        "demo over: phase {:?}, score {}, level {}, lives {}, {:.1}s simulated",
        state.phase,
        state.score,
        state.director.level,
        state.player.lives,
        state.time
    );
}
