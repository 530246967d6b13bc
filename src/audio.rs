//! Audio routing
//!
//! Maps simulation events to sound effect cues and applies the volume
//! settings. The headless build logs cues instead of synthesizing them; a
//! platform backend would hang its sample playback off [`AudioManager::play`].

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    Shoot,
    /// Something blew up
    Explosion,
    /// Player got dizzied
    Dizzy,
    /// Run lost
    GameOver,
    /// Boss down
    Victory,
}

/// Sound cue for a simulation event, if the event is audible
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::ShotFired => Some(SoundEffect::Shoot),
        GameEvent::AsteroidSplit
        | GameEvent::AsteroidDestroyed
        | GameEvent::EnemyDestroyed
        | GameEvent::CookieDestroyed
        | GameEvent::LifeLost => Some(SoundEffect::Explosion),
        GameEvent::Dizzy => Some(SoundEffect::Dizzy),
        GameEvent::Defeat => Some(SoundEffect::GameOver),
        GameEvent::Victory => Some(SoundEffect::Victory),
        GameEvent::EnemyBulletBlocked
        | GameEvent::BossSpawned
        | GameEvent::BossHit
        | GameEvent::BossStageTwo
        | GameEvent::LevelUp(_) => None,
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioManager {
    /// Build a manager from the loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::trace!("sfx {:?} at volume {:.2}", effect, vol);
    }
}
