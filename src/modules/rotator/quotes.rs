use std::time::Duration;

/// Cadence of the automatic quote change.
pub const TICK_INTERVAL: Duration = Duration::from_millis(4000);

/// One-at-a-time circular rotator for testimonial quotes. Dot navigation
/// jumps directly to an index; a manual jump does not restart the autoplay
/// clock, so the next automatic change still lands on schedule.
#[derive(Debug, Clone)]
pub struct QuoteRotator<T> {
    items: Vec<T>,
    active: usize,
}

impl<T> QuoteRotator<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.active = (self.active + 1) % self.items.len();
    }

    pub fn jump(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.active = index % self.items.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_every_quote_and_wraps() {
        let mut rotator = QuoteRotator::new(vec!["a", "b", "c"]);

        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.active(), Some(&"c"));

        rotator.advance();
        assert_eq!(rotator.active(), Some(&"a"));
    }

    #[test]
    fn dot_navigation_jumps_directly() {
        let mut rotator = QuoteRotator::new(vec!["a", "b", "c", "d"]);

        rotator.jump(2);
        assert_eq!(rotator.active_index(), 2);

        rotator.jump(9);
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn an_empty_rotator_stays_inert() {
        let mut rotator: QuoteRotator<&str> = QuoteRotator::new(Vec::new());

        rotator.advance();
        rotator.jump(5);

        assert!(rotator.active().is_none());
        assert_eq!(rotator.active_index(), 0);
    }
}
