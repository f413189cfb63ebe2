//! Rocket controller
//!
//! Turns keyboard state into thrust/rotation commands and runs the rocket's
//! lifecycle: `Alive` until it touches the finish pad (`Transcending`) or
//! anything hostile (`Dying`). Both outcomes are terminal; the scheduled level
//! load replaces the whole level, controller included.
//!
//! Each frame rotation is processed before thrust. Sequences stop the audio
//! source before playing their own clip.

use glam::Vec3;

use super::body::PhysicsBody;
use super::clock::FrameClock;
use super::input::InputSource;
use super::level::LevelLoader;
use super::presentation::{ParticleEffect, PresentationSink, SoundClip};
use super::state::{ContactTag, LevelTransition, RocketState};
use crate::consts::FULL_VOLUME;
use crate::error::SetupError;
use crate::settings::{KeyBindings, Settings};

/// Scene services a rocket borrows for one frame
pub struct FrameContext<'a> {
    pub input: &'a dyn InputSource,
    pub clock: &'a mut dyn FrameClock,
    pub levels: &'a mut dyn LevelLoader,
}

/// Player-controlled rocket
pub struct RocketController<B, S> {
    state: RocketState,
    collisions_enabled: bool,
    rcs_thrust: f32,
    main_thrust: f32,
    level_load_delay: f32,
    success_volume: f32,
    debug_keys: bool,
    bindings: KeyBindings,
    body: B,
    presentation: S,
}

/// Wires a rocket to its rigid body and presentation
pub struct RocketBuilder<B, S> {
    settings: Settings,
    body: Option<B>,
    presentation: Option<S>,
}

impl<B: PhysicsBody, S: PresentationSink> RocketBuilder<B, S> {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            body: None,
            presentation: None,
        }
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn presentation(mut self, presentation: S) -> Self {
        self.presentation = Some(presentation);
        self
    }

    /// Validate settings and collaborators
    pub fn build(self) -> Result<RocketController<B, S>, SetupError> {
        self.settings.validate()?;
        let body = self
            .body
            .ok_or(SetupError::MissingCollaborator("physics body"))?;
        let presentation = self
            .presentation
            .ok_or(SetupError::MissingCollaborator("presentation sink"))?;

        let s = self.settings;
        Ok(RocketController {
            state: RocketState::Alive,
            collisions_enabled: true,
            rcs_thrust: s.rcs_thrust,
            main_thrust: s.main_thrust,
            level_load_delay: s.level_load_delay,
            success_volume: s.success_volume,
            debug_keys: s.debug_keys,
            bindings: s.bindings,
            body,
            presentation,
        })
    }
}

impl<B: PhysicsBody, S: PresentationSink> RocketController<B, S> {
    pub fn state(&self) -> RocketState {
        self.state
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }

    /// Debug: flip collision handling. Never changes `state`.
    pub fn toggle_collisions(&mut self) {
        self.collisions_enabled = !self.collisions_enabled;
        log::info!(
            "Collisions {}",
            if self.collisions_enabled { "enabled" } else { "disabled" }
        );
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn presentation(&self) -> &S {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut S {
        &mut self.presentation
    }

    /// Per-frame entry point
    pub fn on_update(&mut self, ctx: &mut FrameContext<'_>) {
        let dt = ctx.clock.delta_time();
        if self.state.is_alive() {
            self.respond_to_rotate_input(ctx.input, dt);
            self.respond_to_thrust_input(ctx.input, dt);
        }
        if self.debug_keys {
            self.respond_to_debug_keys(ctx);
        }
    }

    /// Contact with tagged level geometry
    pub fn on_collision(&mut self, tag: ContactTag, clock: &mut dyn FrameClock) {
        if !self.state.is_alive() || !self.collisions_enabled {
            return;
        }
        match tag {
            ContactTag::Friendly => {}
            ContactTag::Finish => self.start_success_sequence(clock),
            ContactTag::Hazard => self.start_death_sequence(clock),
        }
    }

    fn respond_to_debug_keys(&mut self, ctx: &mut FrameContext<'_>) {
        if ctx.input.is_pressed_this_frame(self.bindings.debug_next_level) {
            LevelTransition::Advance.apply(ctx.levels);
        }
        if ctx.input.is_pressed_this_frame(self.bindings.debug_toggle_collisions) {
            self.toggle_collisions();
        }
    }

    fn respond_to_rotate_input(&mut self, input: &dyn InputSource, dt: f32) {
        let positive = input.is_held(self.bindings.rotate_positive);
        let negative = input.is_held(self.bindings.rotate_negative);
        let direction = match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => return,
        };
        self.rotate_manually(direction * self.rcs_thrust * dt);
    }

    fn rotate_manually(&mut self, rotation_this_frame: f32) {
        self.body.set_manual_rotation(true);
        self.body.rotate(rotation_this_frame, Vec3::Z);
        self.body.set_manual_rotation(false);
    }

    fn respond_to_thrust_input(&mut self, input: &dyn InputSource, dt: f32) {
        if input.is_held(self.bindings.thrust) {
            self.apply_thrust(dt);
        } else {
            self.stop_applying_thrust();
        }
    }

    fn apply_thrust(&mut self, dt: f32) {
        self.body.apply_relative_force(Vec3::Y * self.main_thrust * dt);
        if !self.presentation.is_playing() {
            self.presentation.play_one_shot(SoundClip::MainEngine, FULL_VOLUME);
        }
        self.presentation.start_particles(ParticleEffect::MainEngine);
    }

    fn stop_applying_thrust(&mut self) {
        self.presentation.stop();
        self.presentation.stop_particles(ParticleEffect::MainEngine);
    }

    fn start_success_sequence(&mut self, clock: &mut dyn FrameClock) {
        self.start_sequence(
            RocketState::Transcending,
            SoundClip::Success,
            self.success_volume,
            ParticleEffect::Success,
            LevelTransition::Advance,
            clock,
        );
    }

    fn start_death_sequence(&mut self, clock: &mut dyn FrameClock) {
        self.start_sequence(
            RocketState::Dying,
            SoundClip::Death,
            FULL_VOLUME,
            ParticleEffect::Death,
            LevelTransition::ReloadFirst,
            clock,
        );
    }

    fn start_sequence(
        &mut self,
        next: RocketState,
        clip: SoundClip,
        volume: f32,
        effect: ParticleEffect,
        transition: LevelTransition,
        clock: &mut dyn FrameClock,
    ) {
        log::info!(
            "Rocket {} -> {}, {:?} in {}s",
            self.state.as_str(),
            next.as_str(),
            transition,
            self.level_load_delay
        );
        self.state = next;

        self.presentation.stop();
        self.presentation.play_one_shot(clip, volume);
        // Thrust processing has ended, so the plume would otherwise burn forever
        self.presentation.stop_particles(ParticleEffect::MainEngine);
        self.presentation.start_particles(effect);

        clock.after(
            self.level_load_delay,
            Box::new(move |levels: &mut dyn LevelLoader| transition.apply(levels)),
        );
    }
}
