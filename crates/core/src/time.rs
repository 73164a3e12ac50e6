use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// Time source shared by the quiz session and the services around it.
///
/// `Manual` clocks share their instant between clones, so a test can hand one
/// clone to a session and keep another to move time forward.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    #[default]
    System,
    Manual(Arc<AtomicI64>),
}

impl Clock {
    /// Returns a clock that reads the system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a manually driven clock starting at `at` (millisecond precision).
    #[must_use]
    pub fn manual(at: DateTime<Utc>) -> Self {
        Self::Manual(Arc::new(AtomicI64::new(at.timestamp_millis())))
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(millis) => {
                let value = millis.load(Ordering::Acquire);
                DateTime::<Utc>::from_timestamp_millis(value).unwrap_or_default()
            }
        }
    }

    /// Move a manual clock forward. No effect on the system clock.
    pub fn advance(&self, delta: Duration) {
        if let Clock::Manual(millis) = self {
            millis.fetch_add(delta.num_milliseconds(), Ordering::AcqRel);
        }
    }

    /// Milliseconds elapsed since `since`, saturating at zero when the clock
    /// reads earlier than `since`.
    #[must_use]
    pub fn millis_since(&self, since: DateTime<Utc>) -> u64 {
        let elapsed = (self.now() - since).num_milliseconds();
        u64::try_from(elapsed).unwrap_or(0)
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Clock::Manual(_))
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns the deterministic test instant.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a manual clock parked at [`fixed_now`].
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::manual(fixed_now())
}
