//! Timestamp id allocation shared by the repository implementations.

use chrono::Utc;

/// Hands out Unix-millisecond ids that never repeat within one store.
///
/// Two ids requested in the same millisecond (or after the wall clock steps
/// back) are bumped past the last one issued.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdClock {
    last: i64,
}

impl IdClock {
    /// Clock that will only issue ids greater than `last`.
    pub(crate) fn starting_after(last: i64) -> Self {
        Self { last }
    }

    pub(crate) fn next(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_is_bumped() {
        let mut clock = IdClock::default();
        assert_eq!(clock.next_at(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(clock.next_at(1_700_000_000_000), 1_700_000_000_001);
        assert_eq!(clock.next_at(1_699_999_999_999), 1_700_000_000_002);
        assert_eq!(clock.next_at(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_starting_after_existing_ids() {
        let far_future = Utc::now().timestamp_millis() + 10_000;
        let mut clock = IdClock::starting_after(far_future);
        assert_eq!(clock.next(), far_future + 1);
    }
}
