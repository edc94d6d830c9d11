//! Record sequence ids

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Monotonic id source shared by every logger that holds it.
///
/// [`SequenceCounter::global`] is the process-wide instance loggers use unless
/// another counter is injected.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    last: AtomicU64,
}

impl SequenceCounter {
    /// A fresh counter. Its first id is 1.
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// The process-wide counter.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<SequenceCounter>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Increment and return the new value.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Last id handed out, 0 if none yet.
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}
