use chrono::{DateTime, Utc};

/// Source of the current instant for token issuance and expiry checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::Clock;
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock pinned to a unix timestamp that tests move by hand.
    #[derive(Debug)]
    pub struct FixedClock(AtomicI64);

    impl FixedClock {
        pub fn at(timestamp: i64) -> Self {
            Self(AtomicI64::new(timestamp))
        }

        pub fn set(&self, timestamp: i64) {
            self.0.store(timestamp, Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(self.0.load(Ordering::SeqCst), 0).unwrap_or_default()
        }
    }
}
