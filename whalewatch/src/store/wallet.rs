//! # Wallet Store
//!
//! Ordered collection of tracked wallets. Order is insertion order; no
//! mutation reorders it.

use shared::dto::{
    NewWallet, Network, Wallet, WalletId, WalletSnapshot, PLACEHOLDER_BALANCE,
    PLACEHOLDER_LAST_ACTIVITY,
};
use tracing::{debug, info};

use crate::core::error::Result;
use crate::utils::validation::require_all;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletStore {
    wallets: Vec<Wallet>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo wallets shown on first launch
    pub fn seeded() -> Self {
        let demo = [
            (
                "0x742d35Cc6634C0532925a3b844Bc9e7595f7bF4a",
                "Vitalik.eth",
                Network::Eth,
                "245,892 ETH",
                "2 min ago",
                true,
                true,
            ),
            (
                "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty",
                "SOL Whale #42",
                Network::Sol,
                "1.2M SOL",
                "15 min ago",
                true,
                false,
            ),
            (
                "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
                "Satoshi Reserve",
                Network::Btc,
                "50,000 BTC",
                "3 hours ago",
                false,
                true,
            ),
        ];

        let wallets = demo
            .into_iter()
            .map(
                |(address, label, network, balance, last_activity, is_active, alerts_enabled)| Wallet {
                    id: WalletId::new(),
                    address: address.to_string(),
                    label: label.to_string(),
                    network,
                    balance: balance.to_string(),
                    last_activity: last_activity.to_string(),
                    is_active,
                    alerts_enabled,
                },
            )
            .collect();

        Self { wallets }
    }

    /// Start tracking a wallet.
    ///
    /// Address and label are trimmed and must be non-empty; nothing else about
    /// the address is checked. On success the wallet gets a fresh id and the
    /// placeholder balance/last-activity, and is appended at the end.
    pub fn add(&mut self, candidate: NewWallet) -> Result<&Wallet> {
        let fields = require_all(&[("Address", &candidate.address), ("Label", &candidate.label)])?;

        let wallet = Wallet {
            id: WalletId::new(),
            address: fields[0].to_string(),
            label: fields[1].to_string(),
            network: candidate.network,
            balance: PLACEHOLDER_BALANCE.to_string(),
            last_activity: PLACEHOLDER_LAST_ACTIVITY.to_string(),
            is_active: true,
            alerts_enabled: candidate.alerts_enabled,
        };

        info!(
            wallet_id = %wallet.id,
            label = %wallet.label,
            network = %wallet.network,
            alerts_enabled = wallet.alerts_enabled,
            "Wallet added"
        );

        self.wallets.push(wallet);
        Ok(&self.wallets[self.wallets.len() - 1])
    }

    /// Flip `alerts_enabled`. Returns the new value, or `None` when the id is unknown.
    pub fn toggle_alerts(&mut self, id: WalletId) -> Option<bool> {
        let wallet = self.wallets.iter_mut().find(|w| w.id == id)?;
        wallet.alerts_enabled = !wallet.alerts_enabled;
        debug!(wallet_id = %id, alerts_enabled = wallet.alerts_enabled, "Wallet alerts toggled");
        Some(wallet.alerts_enabled)
    }

    /// Stop tracking a wallet. Unknown ids are a no-op.
    pub fn remove(&mut self, id: WalletId) -> Option<Wallet> {
        let index = self.wallets.iter().position(|w| w.id == id)?;
        let wallet = self.wallets.remove(index);
        info!(wallet_id = %id, label = %wallet.label, "Wallet removed");
        Some(wallet)
    }

    /// Write a resolver result into the display fields. Unknown ids are a no-op.
    pub fn apply_snapshot(&mut self, id: WalletId, snapshot: WalletSnapshot) -> bool {
        match self.wallets.iter_mut().find(|w| w.id == id) {
            Some(wallet) => {
                wallet.balance = snapshot.balance;
                wallet.last_activity = snapshot.last_activity;
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn get(&self, id: WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.wallets.iter().filter(|w| w.is_active).count()
    }

    pub fn alerts_enabled_count(&self) -> usize {
        self.wallets.iter().filter(|w| w.alerts_enabled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use std::collections::HashSet;

    fn candidate(address: &str, label: &str) -> NewWallet {
        NewWallet {
            address: address.to_string(),
            label: label.to_string(),
            network: Network::Eth,
            alerts_enabled: true,
        }
    }

    #[test]
    fn test_add_sets_placeholders() {
        let mut store = WalletStore::new();
        let wallet = store.add(candidate("0xabc", "Whale1")).unwrap().clone();

        assert_eq!(wallet.balance, "---");
        assert_eq!(wallet.last_activity, "Syncing...");
        assert!(wallet.is_active);
        assert!(wallet.alerts_enabled);
        assert_eq!(wallet.network, Network::Eth);
        assert_eq!(store.list(), &[wallet]);
    }

    #[test]
    fn test_add_trims_fields() {
        let mut store = WalletStore::new();
        let wallet = store.add(candidate("  0xabc\t", " Whale1 ")).unwrap();
        assert_eq!(wallet.address, "0xabc");
        assert_eq!(wallet.label, "Whale1");
    }

    #[test]
    fn test_add_grows_with_distinct_ids_in_insertion_order() {
        let mut store = WalletStore::new();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let before = store.len();
            let id = store.add(candidate(&format!("0x{i:04x}"), &format!("Whale{i}"))).unwrap().id;
            assert_eq!(store.len(), before + 1);
            assert!(ids.insert(id), "duplicate id {id}");
        }

        let labels: Vec<_> = store.list().iter().map(|w| w.label.clone()).collect();
        let expected: Vec<_> = (0..50).map(|i| format!("Whale{i}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_add_rejects_blank_fields_without_mutation() {
        let mut store = WalletStore::seeded();
        let before = store.clone();

        for (address, label) in [("", "Whale"), ("0xabc", ""), ("   ", "Whale"), ("0xabc", " \n ")] {
            let err = store.add(candidate(address, label)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(store, before);
        }
    }

    #[test]
    fn test_add_accepts_any_address_format() {
        let mut store = WalletStore::new();
        assert!(store.add(candidate("not-a-real-address", "Whatever")).is_ok());
    }

    #[test]
    fn test_toggle_alerts_twice_restores_value() {
        let mut store = WalletStore::new();
        let id = store.add(candidate("0xabc", "A")).unwrap().id;
        let original = store.get(id).unwrap().alerts_enabled;

        assert_eq!(store.toggle_alerts(id), Some(!original));
        assert_eq!(store.toggle_alerts(id), Some(original));
        assert_eq!(store.get(id).unwrap().alerts_enabled, original);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = WalletStore::seeded();
        let before = store.clone();
        assert_eq!(store.toggle_alerts(WalletId::new()), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = WalletStore::seeded();
        let id = store.list()[1].id;

        assert!(store.remove(id).is_some());
        let after_first = store.clone();
        assert!(store.remove(id).is_none());
        assert_eq!(store, after_first);
        assert_eq!(store.len(), 2);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut store = WalletStore::seeded();
        let first = store.list()[0].label.clone();
        let last = store.list()[2].label.clone();
        store.remove(store.list()[1].id);
        assert_eq!(store.list()[0].label, first);
        assert_eq!(store.list()[1].label, last);
    }

    #[test]
    fn test_seeded_counts() {
        let store = WalletStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.alerts_enabled_count(), 2);
    }

    #[test]
    fn test_apply_snapshot() {
        let mut store = WalletStore::new();
        let id = store.add(candidate("0xabc", "A")).unwrap().id;
        let snapshot = WalletSnapshot {
            balance: "12 ETH".to_string(),
            last_activity: "just now".to_string(),
        };

        assert!(store.apply_snapshot(id, snapshot.clone()));
        assert_eq!(store.get(id).unwrap().balance, "12 ETH");
        assert!(!store.apply_snapshot(WalletId::new(), snapshot));
    }
}
