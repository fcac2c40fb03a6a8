//! Sound triggering
//!
//! The simulation only reports [`GameEvent`]s. This module turns them into
//! sound keys and hands those to whatever playback backend the frontend
//! provides. A missing audio device must never stall a frame, so sinks are
//! fire-and-forget.

use crate::sim::GameEvent;

/// Sound effect keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bullet fired
    Shoot,
    /// Garlic thrown
    Throw,
    /// Player took damage
    Hit,
    /// Player died
    Death,
    /// Carrot blew up
    Explosion,
    /// Garlic struck the vampire
    VampireDeath,
    /// Item picked up
    Pickup,
}

impl SoundEffect {
    /// Asset key the frontend resolves to a sound file
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Throw => "throw",
            SoundEffect::Hit => "hit",
            SoundEffect::Death => "death",
            SoundEffect::Explosion => "explosion",
            SoundEffect::VampireDeath => "vampire_death",
            SoundEffect::Pickup => "pickup",
        }
    }

    /// The sound (if any) a simulation event should trigger
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BulletFired => Some(SoundEffect::Shoot),
            GameEvent::GarlicThrown => Some(SoundEffect::Throw),
            GameEvent::PlayerHit => Some(SoundEffect::Hit),
            GameEvent::PlayerDied => Some(SoundEffect::Death),
            GameEvent::CarrotKilled { .. } => Some(SoundEffect::Explosion),
            GameEvent::VampireKilled { .. } => Some(SoundEffect::VampireDeath),
            GameEvent::ItemCollected(_) => Some(SoundEffect::Pickup),
            GameEvent::GameOver
            | GameEvent::CarrotRespawned
            | GameEvent::ExplosionFinished { .. }
            | GameEvent::VampireVanished { .. }
            | GameEvent::VampireBite
            | GameEvent::VampireRespawned => None,
        }
    }
}

/// "Play sound by key" capability supplied by the frontend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Logs each sound instead of playing it (headless runs)
#[derive(Debug, Default, Clone)]
pub struct LogAudio {
    pub muted: bool,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if !self.muted {
            log::trace!("play sound '{}'", effect.key());
        }
    }
}

/// Collects sounds in order (tests, replays)
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}
