/*
[INPUT]:  Command-scoped acquire/release of the in-flight marker
[OUTPUT]: Observable busy state for UI gating via `watch`
[POS]:    Sync layer - network-activity indicator shared by all commands
[UPDATE]: When changing busy observation or guard semantics
*/

use std::sync::Arc;
use tokio::sync::watch;

/// Process-wide indicator that at least one network operation is in flight.
///
/// The channel carries the raw in-flight count; busy means `count > 0`.
/// Overlapping operations compose: the signal only reads idle again once
/// the last outstanding guard is dropped.
#[derive(Debug, Clone)]
pub struct BusySignal {
    count: Arc<watch::Sender<usize>>,
}

/// Scope marker for one in-flight operation.
///
/// Dropping the guard releases the operation on every exit path, including
/// unwinding, so a failed command can never leave the signal stuck busy.
#[derive(Debug)]
pub struct BusyGuard {
    count: Arc<watch::Sender<usize>>,
}

impl BusySignal {
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self {
            count: Arc::new(count),
        }
    }

    /// Mark one operation as in flight until the returned guard is dropped
    pub fn begin(&self) -> BusyGuard {
        self.count.send_modify(|count| *count += 1);
        BusyGuard {
            count: Arc::clone(&self.count),
        }
    }

    /// Whether any operation is currently in flight
    pub fn is_busy(&self) -> bool {
        *self.count.borrow() > 0
    }

    /// Number of operations currently in flight
    pub fn in_flight(&self) -> usize {
        *self.count.borrow()
    }

    /// Receiver for the in-flight count; the UI blocks input while `> 0`
    pub fn watch(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }
}

impl Default for BusySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.count.send_modify(|count| *count = count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let signal = BusySignal::new();
        assert!(!signal.is_busy());
        assert_eq!(signal.in_flight(), 0);
    }

    #[test]
    fn test_guard_scopes_the_busy_window() {
        let signal = BusySignal::new();
        {
            let _guard = signal.begin();
            assert!(signal.is_busy());
            assert_eq!(signal.in_flight(), 1);
        }
        assert!(!signal.is_busy());
    }

    #[test]
    fn test_overlapping_guards_stay_busy_until_last_release() {
        let signal = BusySignal::new();
        let first = signal.begin();
        let second = signal.begin();
        assert_eq!(signal.in_flight(), 2);

        drop(first);
        // One operation still outstanding: must not report idle.
        assert!(signal.is_busy());

        drop(second);
        assert!(!signal.is_busy());
    }

    #[tokio::test]
    async fn test_watchers_observe_transitions() {
        let signal = BusySignal::new();
        let mut rx = signal.watch();
        assert_eq!(*rx.borrow_and_update(), 0);

        let guard = signal.begin();
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 1);

        drop(guard);
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 0);
    }

    #[test]
    fn test_clones_share_one_counter() {
        let signal = BusySignal::new();
        let clone = signal.clone();
        let _guard = signal.begin();
        assert!(clone.is_busy());
    }
}
