//! # Boundary Ports
//!
//! Traits for the external collaborators the dashboard would talk to in a
//! production deployment. None of them has a production implementation in
//! this crate; the [`Services`] bundle defaults to "not configured" and the
//! core keeps its placeholder behaviour in that case.
//!
//! - [`WalletStateResolver`]: balance / last-activity lookup after a wallet is added
//! - [`NotificationSender`]: delivery of alerts to the configured channel
//! - [`ChainEventSource`]: real chain activity, replacing the simulated generator

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use shared::dto::{ActivityEvent, ChannelConfig, Network, WalletSnapshot};

use crate::core::error::Result;

/// Resolves the display state of a freshly tracked wallet
#[async_trait]
pub trait WalletStateResolver: Send + Sync {
    async fn resolve(&self, address: &str, network: Network) -> Result<WalletSnapshot>;
}

/// Delivers an activity alert to the notification channel
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, channel: &ChannelConfig, event: &ActivityEvent) -> Result<()>;
}

/// Streams chain activity for one wallet.
///
/// The stream ends when the source has nothing more to report; dropping it
/// unsubscribes.
pub trait ChainEventSource: Send + Sync {
    fn subscribe(&self, address: &str, network: Network) -> BoxStream<'static, ActivityEvent>;
}

/// Optional port implementations handed to [`crate::app::App`]
#[derive(Clone, Default)]
pub struct Services {
    pub resolver: Option<Arc<dyn WalletStateResolver>>,
    pub notifier: Option<Arc<dyn NotificationSender>>,
    pub chain: Option<Arc<dyn ChainEventSource>>,
}

impl Services {
    /// No ports configured: placeholders stay frozen, alerts are not delivered
    /// and the feed is driven by the simulated generator.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn WalletStateResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSender>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_chain(mut self, chain: Arc<dyn ChainEventSource>) -> Self {
        self.chain = Some(chain);
        self
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("resolver", &self.resolver.is_some())
            .field("notifier", &self.notifier.is_some())
            .field("chain", &self.chain.is_some())
            .finish()
    }
}
