//! Coalescing timer for quality changes.
//!
//! Every [`Debouncer::push`] replaces the pending value and restarts the quiet
//! period. The value is released by [`Debouncer::poll`] once the host clock
//! reaches the deadline. Time is a caller-supplied monotonic millisecond count,
//! so the debouncer never owns a real timer.

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    /// Queue `value`, superseding anything still pending.
    pub fn push(&mut self, value: T, now: u64) {
        self.pending = Some(Pending {
            value,
            deadline: now.saturating_add(self.window_ms),
        });
    }

    /// When the pending value will be released, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_after_window() {
        let mut debouncer = Debouncer::new(100);
        debouncer.push(1, 0);

        assert_eq!(debouncer.deadline(), Some(100));
        assert_eq!(debouncer.poll(99), None);
        assert_eq!(debouncer.poll(100), Some(1));
        assert_eq!(debouncer.poll(500), None);
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let mut debouncer = Debouncer::new(100);
        debouncer.push("a", 0);
        debouncer.push("b", 40);
        debouncer.push("c", 80);

        assert_eq!(debouncer.poll(150), None);
        assert_eq!(debouncer.poll(180), Some("c"));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(250);
        debouncer.push(7, 10);

        assert_eq!(debouncer.cancel(), Some(7));
        assert_eq!(debouncer.poll(10_000), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_zero_window_fires_immediately() {
        let mut debouncer = Debouncer::new(0);
        debouncer.push(3, 42);
        assert_eq!(debouncer.poll(42), Some(3));
    }

    #[test]
    fn test_deadline_saturates() {
        let mut debouncer = Debouncer::new(100);
        debouncer.push((), u64::MAX - 1);
        assert_eq!(debouncer.deadline(), Some(u64::MAX));
    }
}
