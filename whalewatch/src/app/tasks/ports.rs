//! # Port Tasks
//!
//! Background calls into the configured ports. Results come back to the UI
//! thread as [`AppEvent`]s; nothing here touches the state.

use std::sync::Arc;

use async_channel::Sender;
use futures::StreamExt;
use shared::dto::{ActivityEvent, ChannelConfig, Network, WalletId};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::core::service::{ChainEventSource, NotificationSender, WalletStateResolver};

/// Live chain subscription for one wallet, cancelled on drop
#[derive(Debug)]
pub struct Subscription {
    wallet_id: WalletId,
    task: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
        debug!(wallet_id = %self.wallet_id, "Chain subscription released");
    }
}

pub(crate) fn resolve_wallet(
    runtime: &Handle,
    resolver: Arc<dyn WalletStateResolver>,
    id: WalletId,
    address: String,
    network: Network,
    event_tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let result = resolver
            .resolve(&address, network)
            .await
            .map_err(|e| e.to_string());

        if let Err(error) = &result {
            warn!(wallet_id = %id, network = %network, error = %error, "Resolver failed");
        }
        if event_tx.send(AppEvent::WalletResolved { id, result }).await.is_err() {
            debug!(wallet_id = %id, "Event channel closed, dropping resolver result");
        }
    });
}

pub(crate) fn deliver(
    runtime: &Handle,
    notifier: Arc<dyn NotificationSender>,
    config: ChannelConfig,
    event: ActivityEvent,
    event_tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let result = notifier.send(&config, &event).await.map_err(|e| e.to_string());
        if event_tx.send(AppEvent::NotificationDelivered(result)).await.is_err() {
            debug!("Event channel closed, dropping delivery result");
        }
    });
}

pub(crate) fn subscribe(
    runtime: &Handle,
    source: Arc<dyn ChainEventSource>,
    wallet_id: WalletId,
    address: &str,
    network: Network,
    event_tx: Sender<AppEvent>,
) -> Subscription {
    let mut stream = source.subscribe(address, network);

    let task = runtime.spawn(async move {
        while let Some(event) = stream.next().await {
            if event_tx
                .send(AppEvent::ChainActivity { wallet_id, event })
                .await
                .is_err()
            {
                break;
            }
        }
        debug!(wallet_id = %wallet_id, "Chain event stream ended");
    });

    info!(wallet_id = %wallet_id, network = %network, "Subscribed to chain events");
    Subscription { wallet_id, task }
}
