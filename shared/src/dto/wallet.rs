use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Balance shown until a resolver reports a real value
pub const PLACEHOLDER_BALANCE: &str = "---";

/// Last-activity text shown until a resolver reports a real value
pub const PLACEHOLDER_LAST_ACTIVITY: &str = "Syncing...";

/// Opaque wallet identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(Uuid);

impl WalletId {
    /// Fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WalletId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for WalletId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    #[default]
    Eth,
    Sol,
    Btc,
}

impl Network {
    /// All networks in selector order
    pub fn all() -> &'static [Network] {
        &[Network::Eth, Network::Sol, Network::Btc]
    }

    /// Ticker symbol used for badges
    pub fn symbol(&self) -> &'static str {
        match self {
            Network::Eth => "ETH",
            Network::Sol => "SOL",
            Network::Btc => "BTC",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A tracked wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    /// Free-form, never checked against a chain format
    pub address: String,
    pub label: String,
    pub network: Network,
    pub balance: String,
    pub last_activity: String,
    /// Reserved for a future liveness signal; the dashboard never flips it
    pub is_active: bool,
    pub alerts_enabled: bool,
}

/// User-supplied fields for a wallet that is about to be tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWallet {
    pub address: String,
    pub label: String,
    pub network: Network,
    pub alerts_enabled: bool,
}

/// Display state reported by a balance resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub balance: String,
    pub last_activity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Network::Sol).unwrap(), "\"SOL\"");
        let parsed: Network = serde_json::from_str("\"BTC\"").unwrap();
        assert_eq!(parsed, Network::Btc);
    }

    #[test]
    fn test_network_default_is_eth() {
        assert_eq!(Network::default(), Network::Eth);
        assert_eq!(Network::all().len(), 3);
    }

    #[test]
    fn test_wallet_ids_are_unique() {
        assert_ne!(WalletId::new(), WalletId::new());
    }
}
