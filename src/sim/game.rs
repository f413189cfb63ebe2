//! Owned game loop
//!
//! Stands in for the host engine: owns the keyboard, clock and level list,
//! drives the rocket once per frame and rebuilds the level whenever a load is
//! requested. Rebuilding clears the clock, so calls scheduled by the old level
//! never fire.

use glam::Vec3;

use super::body::KinematicBody;
use super::clock::{FrameClock, GameClock};
use super::input::{Key, KeyboardState};
use super::level::{LevelLoader, LevelSequence};
use super::oscillator::Oscillator;
use super::presentation::LogPresentation;
use super::rocket::{FrameContext, RocketBuilder, RocketController};
use super::state::ContactTag;
use crate::error::SetupError;
use crate::settings::Settings;

pub type Rocket = RocketController<KinematicBody, LogPresentation>;

/// Everything instantiated for one level
pub struct Level {
    pub index: usize,
    pub rocket: Rocket,
    pub obstacles: Vec<Oscillator>,
}

/// Builds a fresh level instance for an index
pub type LevelSpawner = Box<dyn FnMut(usize, &Settings) -> Result<Level, SetupError>>;

/// Rocket on the launch pad, plus one sliding obstacle per level past the first
pub fn default_level(index: usize, settings: &Settings) -> Result<Level, SetupError> {
    let mut presentation = LogPresentation::new();
    presentation.set_master_volume(settings.master_volume);
    let rocket = RocketBuilder::new(settings)
        .body(KinematicBody::new(Vec3::ZERO))
        .presentation(presentation)
        .build()?;
    let obstacles = (0..index)
        .map(|i| {
            let start = Vec3::new(10.0 + 8.0 * i as f32, 5.0, 0.0);
            Oscillator::new(start, Vec3::new(0.0, 10.0, 0.0))
        })
        .collect();
    Ok(Level {
        index,
        rocket,
        obstacles,
    })
}

pub struct Game {
    settings: Settings,
    keyboard: KeyboardState,
    clock: GameClock,
    levels: LevelSequence,
    level: Level,
    spawner: LevelSpawner,
    frames: u64,
}

impl Game {
    /// Start on level 0 with the default level layout
    pub fn new(settings: Settings) -> Result<Self, SetupError> {
        Self::with_spawner(settings, Box::new(default_level))
    }

    pub fn with_spawner(
        settings: Settings,
        mut spawner: LevelSpawner,
    ) -> Result<Self, SetupError> {
        settings.validate()?;
        let levels = LevelSequence::new(settings.level_count);
        let level = spawner(0, &settings)?;
        log::info!("Game started: {} levels", settings.level_count);
        Ok(Self {
            settings,
            keyboard: KeyboardState::new(),
            clock: GameClock::new(),
            levels,
            level,
            spawner,
            frames: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn rocket(&self) -> &Rocket {
        &self.level.rocket
    }

    pub fn levels(&self) -> &LevelSequence {
        &self.levels
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn press(&mut self, key: Key) {
        self.keyboard.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keyboard.release(key);
    }

    /// Physics reported a contact
    pub fn collide(&mut self, tag: ContactTag) {
        self.level.rocket.on_collision(tag, &mut self.clock);
    }

    /// Contact reported with an engine tag string
    pub fn collide_tagged(&mut self, tag: &str) {
        self.collide(ContactTag::from_tag(tag));
    }

    /// Run one frame of `dt` seconds. Fails only if rebuilding a level fails.
    pub fn frame(&mut self, dt: f32) -> Result<(), SetupError> {
        self.clock.begin_frame(dt);
        self.frames += 1;

        let mut ctx = FrameContext {
            input: &self.keyboard,
            clock: &mut self.clock,
            levels: &mut self.levels,
        };
        self.level.rocket.on_update(&mut ctx);

        let dt = self.clock.delta_time();
        self.level.rocket.body_mut().step(dt);
        for obstacle in &mut self.level.obstacles {
            obstacle.update();
        }

        // A debug load this frame tears the level down before its calls can fire
        if !self.apply_pending_load()? {
            self.clock.fire_due(&mut self.levels);
            self.apply_pending_load()?;
        }

        self.keyboard.end_frame();
        Ok(())
    }

    fn apply_pending_load(&mut self) -> Result<bool, SetupError> {
        let Some(index) = self.levels.take_pending_load() else {
            return Ok(false);
        };
        self.clock.clear();
        self.level = (self.spawner)(index, &self.settings)?;
        log::info!("Level {}/{} ready", index + 1, self.levels.total_count());
        Ok(true)
    }
}
