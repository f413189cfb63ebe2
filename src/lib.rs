//! Rocket Boost - A lunar-lander style arcade controller
//!
//! Core modules:
//! - `sim`: Rocket lifecycle state machine and the collaborator traits it drives
//! - `settings`: Data-driven tuning and key bindings
//! - `error`: Setup/configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SetupError;
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Rotation speed (degrees per second)
    pub const RCS_THRUST: f32 = 100.0;
    /// Main engine force per second of burn
    pub const MAIN_THRUST: f32 = 100.0;
    /// Delay before a death/success sequence loads the next level (seconds)
    pub const LEVEL_LOAD_DELAY: f32 = 2.0;
    /// Volume of the success jingle (the death sound plays at full volume)
    pub const SUCCESS_VOLUME: f32 = 0.6;
    /// Volume for engine and death one-shots
    pub const FULL_VOLUME: f32 = 1.0;
    /// Master volume for the headless presentation
    pub const MASTER_VOLUME: f32 = 0.8;
    /// Levels in the default build
    pub const LEVEL_COUNT: usize = 3;

    /// Fixed timestep used by the headless demo (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Index of the level after `current`, looping back to 0 after the last one
#[inline]
pub fn next_level_index(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (current + 1) % total
}
