//! Rocket lifecycle and contact types

use serde::{Deserialize, Serialize};

use super::level::LevelLoader;
use crate::next_level_index;

/// Lifecycle phase of a rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RocketState {
    /// Under player control
    #[default]
    Alive,
    /// Crashed, waiting for the first level to reload
    Dying,
    /// Landed on the pad, waiting for the next level to load
    Transcending,
}

impl RocketState {
    pub fn is_alive(&self) -> bool {
        *self == RocketState::Alive
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RocketState::Alive => "Alive",
            RocketState::Dying => "Dying",
            RocketState::Transcending => "Transcending",
        }
    }
}

/// Category of level geometry the rocket touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactTag {
    /// Launch pad and other harmless scenery
    Friendly,
    /// Landing pad
    Finish,
    /// Anything else
    Hazard,
}

impl ContactTag {
    /// Map a host engine tag string. Unknown tags are lethal.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Friendly" => ContactTag::Friendly,
            "Finish" => ContactTag::Finish,
            _ => ContactTag::Hazard,
        }
    }
}

/// Where a finished sequence sends the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelTransition {
    /// Back to level 0 after a crash
    ReloadFirst,
    /// On to the next level, wrapping after the last
    Advance,
}

impl LevelTransition {
    /// Level index this transition targets from the loader's current level
    pub fn target(&self, levels: &dyn LevelLoader) -> usize {
        match self {
            LevelTransition::ReloadFirst => 0,
            LevelTransition::Advance => {
                next_level_index(levels.current_index(), levels.total_count())
            }
        }
    }

    /// Perform the load
    pub fn apply(self, levels: &mut dyn LevelLoader) {
        let index = self.target(levels);
        log::info!("{:?}: loading level {}", self, index);
        levels.load(index);
    }
}
