use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag for one mounted view instance. A fetch that resolves after
/// `unmount()` must not apply its result; the latest mount wins because the
/// earlier handle is marked dead, not because the request is cancelled.
#[derive(Debug, Clone)]
pub struct MountHandle {
    live: Arc<AtomicBool>,
}

impl MountHandle {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for MountHandle {
    fn default() -> Self {
        Self::new()
    }
}
