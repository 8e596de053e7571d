use std::time::Duration;

use crate::profile::domain::entities::Skill;

/// How many skills the home ticker shows at once.
pub const DEFAULT_WINDOW: usize = 6;

/// Cadence of the automatic window shift.
pub const TICK_INTERVAL: Duration = Duration::from_millis(2600);

/// Circular sliding window over the skill list. The window advances by a
/// fixed step and wraps around the end, so the sequence of visible sets
/// repeats indefinitely.
#[derive(Debug, Clone)]
pub struct SkillTicker {
    items: Vec<Skill>,
    offset: usize,
    window: usize,
}

impl SkillTicker {
    pub fn new(items: Vec<Skill>) -> Self {
        Self::with_window(items, DEFAULT_WINDOW)
    }

    pub fn with_window(items: Vec<Skill>, window: usize) -> Self {
        Self {
            items,
            offset: 0,
            window: window.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The skills currently on screen, in window order. With fewer items
    /// than the window, everything shows and nothing repeats.
    pub fn visible(&self) -> Vec<&Skill> {
        let n = self.items.len();
        if n == 0 {
            return Vec::new();
        }
        (0..self.window.min(n))
            .map(|i| &self.items[(self.offset + i) % n])
            .collect()
    }

    /// Rotation only runs when there is more content than the window holds.
    pub fn autoplay_enabled(&self) -> bool {
        self.items.len() > self.window
    }

    pub fn advance(&mut self) {
        let n = self.items.len();
        if n == 0 || !self.autoplay_enabled() {
            return;
        }
        self.offset = (self.offset + 1) % n;
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.window).max(1)
    }

    pub fn current_page(&self) -> usize {
        (self.offset / self.window) % self.page_count()
    }

    /// Jump straight to a page boundary. The landing offset wraps the same
    /// way `advance` does.
    pub fn jump_to_page(&mut self, page: usize) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        self.offset = (page * self.window) % n;
    }
}
