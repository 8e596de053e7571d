use std::future::Future;

use tokio::task::JoinHandle;

use crate::view::mount::MountHandle;

/// One in-flight fetch bound to a view's lifetime. The underlying request is
/// never cancelled; if the view unmounts first, the resolved outcome is
/// dropped on the floor instead of being applied. At most one outcome is
/// applied per effect, and never after teardown.
pub struct FetchEffect {
    task: JoinHandle<()>,
}

impl FetchEffect {
    pub fn spawn<T, Fut, Apply>(mount: MountHandle, fetch: Fut, apply: Apply) -> Self
    where
        T: Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        Apply: FnOnce(T) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let outcome = fetch.await;
            if mount.is_mounted() {
                apply(outcome);
            }
        });

        Self { task }
    }

    /// Wait for the effect to run its course. Test hook; views normally just
    /// let the task finish on its own.
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn outcome_applies_while_the_view_is_mounted() {
        let mount = MountHandle::new();
        let applied = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&applied);

        let effect = FetchEffect::spawn(mount, async { 42usize }, move |value| {
            assert_eq!(value, 42);
            spy.fetch_add(1, Ordering::SeqCst);
        });
        effect.finished().await;

        assert_eq!(applied.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn outcome_is_discarded_after_unmount() {
        let mount = MountHandle::new();
        let applied = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&applied);

        let effect = FetchEffect::spawn(
            mount.clone(),
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                42usize
            },
            move |_| {
                spy.fetch_add(1, Ordering::SeqCst);
            },
        );

        // The view goes away well before the fetch resolves.
        tokio::time::sleep(Duration::from_millis(10)).await;
        mount.unmount();
        effect.finished().await;

        assert_eq!(applied.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_remount_gets_its_own_independent_handle() {
        let first = MountHandle::new();
        let second = MountHandle::new();
        first.unmount();

        let applied = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&applied);
        let effect = FetchEffect::spawn(second, async {}, move |_| {
            spy.fetch_add(1, Ordering::SeqCst);
        });
        effect.finished().await;

        assert_eq!(applied.load(Ordering::SeqCst), 1);
    }
}
