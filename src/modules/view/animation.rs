use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default delay before entrance animations arm, long enough for the first
/// paint to land in the un-animated state.
pub const DEFAULT_ARM_DELAY: Duration = Duration::from_millis(150);

/// Deferred flag for entrance animations. The flag flips on only after a
/// short delay from `arm_after`, and `reset` rearms it from scratch when the
/// underlying data changes.
pub struct AnimationTrigger {
    armed: Arc<AtomicBool>,
    timer: Option<JoinHandle<()>>,
}

impl AnimationTrigger {
    pub fn new() -> Self {
        Self {
            armed: Arc::new(AtomicBool::new(false)),
            timer: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Arm the flag after `delay`. A pending timer from an earlier call is
    /// dropped so only the latest schedule fires.
    pub fn arm_after(&mut self, delay: Duration) {
        self.cancel_timer();
        let armed = Arc::clone(&self.armed);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            armed.store(true, Ordering::Release);
        }));
    }

    /// Disarm immediately. The next `arm_after` starts the cycle over, which
    /// lets views replay the entrance when their data changes.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.armed.store(false, Ordering::Release);
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for AnimationTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationTrigger {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
