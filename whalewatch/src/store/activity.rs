//! Bounded, most-recent-first activity feed.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use shared::dto::{ActivityEvent, ActivityId, ActivityKind};
use uuid::Uuid;

/// Feed size used when nothing else is configured
pub const DEFAULT_FEED_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityStore {
    events: VecDeque<ActivityEvent>,
    capacity: usize,
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_FEED_CAPACITY)
    }
}

impl ActivityStore {
    /// Empty feed holding at most `capacity` events (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Feed pre-populated with the demo events, timestamped relative to `now`
    pub fn seeded(now: DateTime<Utc>, capacity: usize) -> Self {
        let demo = [
            ("Vitalik.eth", ActivityKind::Transfer, "500 ETH", Duration::minutes(2), "0x1234...abcd"),
            ("SOL Whale #42", ActivityKind::Swap, "50,000 USDC", Duration::minutes(15), "5xYz...9999"),
            ("Vitalik.eth", ActivityKind::Stake, "1,000 ETH", Duration::minutes(30), "0x5678...efgh"),
            ("Satoshi Reserve", ActivityKind::Transfer, "100 BTC", Duration::hours(3), "bc1q...wxyz"),
        ];

        let mut store = Self::with_capacity(capacity);
        // Oldest first so the freshest demo event ends up at the head
        for (label, kind, amount, age, hash) in demo.into_iter().rev() {
            store.prepend(ActivityEvent {
                id: ActivityId::from(Uuid::new_v4()),
                wallet_label: label.to_string(),
                kind,
                amount: amount.to_string(),
                timestamp: now - age,
                hash: hash.to_string(),
            });
        }
        store
    }

    /// Insert at the front, then drop anything beyond capacity
    pub fn prepend(&mut self, event: ActivityEvent) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
    }

    pub fn list(&self) -> Vec<ActivityEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    /// Number of retained events stamped at or after `cutoff`
    pub fn count_since(&self, cutoff: DateTime<Utc>) -> usize {
        self.events.iter().filter(|e| e.timestamp >= cutoff).count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap()
    }

    fn event(n: u8) -> ActivityEvent {
        ActivityEvent {
            id: ActivityId::from_random_bytes([n; 16]),
            wallet_label: format!("W{n}"),
            kind: ActivityKind::Swap,
            amount: "100 ETH".to_string(),
            timestamp: now(),
            hash: format!("0x{n:08x}...0000"),
        }
    }

    #[test]
    fn test_seeded_demo_feed() {
        let store = ActivityStore::seeded(now(), DEFAULT_FEED_CAPACITY);
        let events = store.list();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].wallet_label, "Vitalik.eth");
        assert_eq!(events[0].amount, "500 ETH");
        assert_eq!(events[0].timestamp, now() - Duration::minutes(2));
        assert_eq!(events[3].wallet_label, "Satoshi Reserve");
        assert_eq!(events[3].timestamp, now() - Duration::hours(3));
    }

    #[test]
    fn test_prepend_puts_event_at_head() {
        let mut store = ActivityStore::default();
        for n in 0..30 {
            let e = event(n);
            store.prepend(e.clone());
            assert_eq!(store.list()[0], e);
            assert!(store.len() <= 10);
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_seeded_then_eight_prepends() {
        let mut store = ActivityStore::seeded(now(), DEFAULT_FEED_CAPACITY);
        let added: Vec<_> = (1..=8).map(event).collect();
        for e in &added {
            store.prepend(e.clone());
        }

        let events = store.list();
        assert_eq!(events.len(), 10);
        assert_eq!(events[0], added[7]);
        // Two oldest demo events were dropped
        assert_eq!(events[8].wallet_label, "Vitalik.eth");
        assert_eq!(events[9].wallet_label, "SOL Whale #42");
    }

    #[test]
    fn test_custom_capacity() {
        let mut store = ActivityStore::with_capacity(2);
        for n in 0..5 {
            store.prepend(event(n));
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].wallet_label, "W4");

        let mut single = ActivityStore::with_capacity(0);
        single.prepend(event(0));
        single.prepend(event(1));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_count_since() {
        let store = ActivityStore::seeded(now(), DEFAULT_FEED_CAPACITY);
        assert_eq!(store.count_since(now() - Duration::hours(24)), 4);
        assert_eq!(store.count_since(now() - Duration::minutes(20)), 2);
        assert_eq!(store.count_since(now()), 0);
    }
}
