//! Audio and particle feedback
//!
//! Fire-and-forget commands. The rocket never reads anything back except
//! whether a clip is still playing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Sound clips a rocket can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundClip {
    /// Engine burn
    MainEngine,
    /// Crash
    Death,
    /// Landed on the finish pad
    Success,
}

/// Particle effects attached to the rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleEffect {
    /// Exhaust plume
    MainEngine,
    /// Explosion
    Death,
    /// Celebration burst
    Success,
}

/// Audio source + particle systems of one rocket
pub trait PresentationSink {
    /// Play a clip once at `volume` (0.0 - 1.0)
    fn play_one_shot(&mut self, clip: SoundClip, volume: f32);
    /// Stop whatever the audio source is playing
    fn stop(&mut self);
    /// Audio source is currently playing
    fn is_playing(&self) -> bool;
    /// Start (or keep running) a particle effect
    fn start_particles(&mut self, effect: ParticleEffect);
    /// Stop a particle effect; no-op if it is not running
    fn stop_particles(&mut self, effect: ParticleEffect);
}

impl<T: PresentationSink + ?Sized> PresentationSink for Box<T> {
    fn play_one_shot(&mut self, clip: SoundClip, volume: f32) {
        (**self).play_one_shot(clip, volume);
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }

    fn start_particles(&mut self, effect: ParticleEffect) {
        (**self).start_particles(effect);
    }

    fn stop_particles(&mut self, effect: ParticleEffect) {
        (**self).stop_particles(effect);
    }
}

/// Headless presentation: tracks what would be audible/visible and logs it
#[derive(Debug, Clone)]
pub struct LogPresentation {
    playing: Option<(SoundClip, f32)>,
    particles: HashSet<ParticleEffect>,
    master_volume: f32,
}

impl Default for LogPresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPresentation {
    pub fn new() -> Self {
        Self {
            playing: None,
            particles: HashSet::new(),
            master_volume: 1.0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Clip currently playing and its effective volume
    pub fn playing(&self) -> Option<(SoundClip, f32)> {
        self.playing
    }

    pub fn particles_active(&self, effect: ParticleEffect) -> bool {
        self.particles.contains(&effect)
    }

    fn effective_volume(&self, volume: f32) -> f32 {
        volume.clamp(0.0, 1.0) * self.master_volume
    }
}

impl PresentationSink for LogPresentation {
    fn play_one_shot(&mut self, clip: SoundClip, volume: f32) {
        let vol = self.effective_volume(volume);
        log::debug!("play {:?} at volume {:.2}", clip, vol);
        self.playing = Some((clip, vol));
    }

    fn stop(&mut self) {
        if let Some((clip, _)) = self.playing.take() {
            log::debug!("stop {:?}", clip);
        }
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn start_particles(&mut self, effect: ParticleEffect) {
        if self.particles.insert(effect) {
            log::debug!("particles {:?} on", effect);
        }
    }

    fn stop_particles(&mut self, effect: ParticleEffect) {
        if self.particles.remove(&effect) {
            log::debug!("particles {:?} off", effect);
        }
    }
}
