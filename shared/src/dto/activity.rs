use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Activity event identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    /// Build an identifier from caller-supplied random bytes
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl From<Uuid> for ActivityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of on-chain activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Transfer,
    Swap,
    Mint,
    Stake,
}

impl ActivityKind {
    pub fn all() -> &'static [ActivityKind] {
        &[
            ActivityKind::Transfer,
            ActivityKind::Swap,
            ActivityKind::Mint,
            ActivityKind::Stake,
        ]
    }

    /// Badge text in the feed
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Transfer => "TRANSFER",
            ActivityKind::Swap => "SWAP",
            ActivityKind::Mint => "MINT",
            ActivityKind::Stake => "STAKE",
        }
    }

    /// Glyph shown next to the event
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Transfer => "↗",
            ActivityKind::Swap => "⇄",
            ActivityKind::Mint => "✦",
            ActivityKind::Stake => "⬡",
        }
    }
}

/// A single entry of the live feed.
///
/// `wallet_label` is copied when the event is created; renaming or removing
/// the wallet later does not touch past events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: ActivityId,
    pub wallet_label: String,
    pub kind: ActivityKind,
    pub amount: String,
    pub timestamp: DateTime<Utc>,
    /// Cosmetic only, carries no integrity meaning
    pub hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ActivityKind::Stake).unwrap(), "\"stake\"");
    }

    #[test]
    fn test_activity_id_from_random_bytes_is_deterministic() {
        let a = ActivityId::from_random_bytes([7; 16]);
        let b = ActivityId::from_random_bytes([7; 16]);
        let c = ActivityId::from_random_bytes([8; 16]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
