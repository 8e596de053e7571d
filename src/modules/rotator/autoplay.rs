use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::rotator::quotes::QuoteRotator;
use crate::rotator::ticker::SkillTicker;

/// A rotator the autoplay loop can tick.
pub trait Advance: Send {
    fn advance(&mut self);
}

impl Advance for SkillTicker {
    fn advance(&mut self) {
        SkillTicker::advance(self);
    }
}

impl<T: Send> Advance for QuoteRotator<T> {
    fn advance(&mut self) {
        QuoteRotator::advance(self);
    }
}

/// Owned autoplay loop. Ticks the shared rotator at a fixed interval until
/// cancelled or dropped; dropping the handle stops the loop so a dismounted
/// view never keeps rotating in the background.
pub struct Autoplay {
    task: JoinHandle<()>,
}

impl Autoplay {
    pub fn start<R>(rotator: Arc<Mutex<R>>, interval: Duration) -> Self
    where
        R: Advance + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The zeroth tick completes immediately; consume it so the first
            // advance happens one full interval after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Ok(mut engine) = rotator.lock() {
                    engine.advance();
                }
            }
        });

        Self { task }
    }

    /// Start autoplay for a skill ticker only when it has more content than
    /// fits on screen.
    pub fn start_ticker(ticker: Arc<Mutex<SkillTicker>>, interval: Duration) -> Option<Self> {
        let enabled = match ticker.lock() {
            Ok(guard) => guard.autoplay_enabled(),
            Err(_) => false,
        };
        enabled.then(|| Self::start(ticker, interval))
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.task.abort();
    }
}
