use std::time::{Duration, Instant};

/// Holds the latest search query back until typing pauses, so a big
/// table is not re-filtered on every keystroke.
///
/// A delay of zero disables debouncing: queries become ready
/// immediately.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    last_keystroke: Option<Instant>,
    pending: Option<String>,
}

impl SearchDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_keystroke: None,
            pending: None,
        }
    }

    /// Record a keystroke. Only the most recent query is kept.
    pub fn push(&mut self, query: &str) {
        self.last_keystroke = Some(Instant::now());
        self.pending = Some(query.to_string());
    }

    /// Take the pending query if the quiet period has elapsed.
    pub fn take_ready(&mut self) -> Option<String> {
        let last = self.last_keystroke?;
        if last.elapsed() >= self.delay {
            self.last_keystroke = None;
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any queued query without applying it.
    pub fn reset(&mut self) {
        self.last_keystroke = None;
        self.pending = None;
    }
}
