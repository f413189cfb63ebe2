//! Rocket simulation module
//!
//! Gameplay logic and the collaborator traits it talks through:
//! - No rendering, audio or windowing dependencies
//! - Collaborators are traits so a host engine (or a test) can plug in
//! - Single-threaded; the host calls `on_update`/`on_collision` from its frame loop

pub mod body;
pub mod clock;
pub mod game;
pub mod input;
pub mod level;
pub mod oscillator;
pub mod presentation;
pub mod rocket;
pub mod state;

pub use body::{KinematicBody, PhysicsBody};
pub use clock::{Deferred, FrameClock, GameClock};
pub use game::{Game, Level, LevelSpawner, Rocket, default_level};
pub use input::{InputSource, Key, KeyboardState};
pub use level::{LevelLoader, LevelSequence};
pub use oscillator::Oscillator;
pub use presentation::{LogPresentation, ParticleEffect, PresentationSink, SoundClip};
pub use rocket::{FrameContext, RocketBuilder, RocketController};
pub use state::{ContactTag, LevelTransition, RocketState};
