//! Level loading
//!
//! The host owns the actual scenes. A load is synchronous from the caller's
//! point of view: the current index changes immediately and the owner tears
//! the old level down before the next frame.

/// Scene loader as seen by a rocket
pub trait LevelLoader {
    /// Switch to level `index`
    fn load(&mut self, index: usize);
    /// Index of the level currently loaded
    fn current_index(&self) -> usize;
    /// Number of levels in the build
    fn total_count(&self) -> usize;
}

/// Ordered list of levels, tracking which one is active
#[derive(Debug, Clone)]
pub struct LevelSequence {
    current: usize,
    total: usize,
    /// Set by `load`, consumed by whoever rebuilds the level
    pending: Option<usize>,
}

impl LevelSequence {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            pending: None,
        }
    }

    /// Level requested since the last call, if any
    pub fn take_pending_load(&mut self) -> Option<usize> {
        self.pending.take()
    }
}

impl LevelLoader for LevelSequence {
    fn load(&mut self, index: usize) {
        if index >= self.total {
            log::warn!("Ignoring load of level {} (only {} levels)", index, self.total);
            return;
        }
        log::info!("Loading level {}", index);
        self.current = index;
        self.pending = Some(index);
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn total_count(&self) -> usize {
        self.total
    }
}
