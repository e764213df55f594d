use nlsolve_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::HasIterate;

/// An observer that logs every event through `tracing`.
///
/// Each event becomes one `tracing` event named `"iterate"` carrying the
/// iteration number, the norm, and the iterate's components. Install a
/// subscriber to see the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    level: Level,
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl TraceObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E: HasIterate> Observer<E> for TraceObserver {
    fn observe(&mut self, event: &E) {
        let iter = event.iter();
        let norm = event.norm();
        let x = event.x().as_slice();

        match self.level {
            Level::ERROR => error!(iter, norm, ?x, "iterate"),
            Level::WARN => warn!(iter, norm, ?x, "iterate"),
            Level::INFO => info!(iter, norm, ?x, "iterate"),
            Level::DEBUG => debug!(iter, norm, ?x, "iterate"),
            _ => trace!(iter, norm, ?x, "iterate"),
        }
    }
}
