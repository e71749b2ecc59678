//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, the background timers
//! and port tasks, and the application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains AppEvents every frame          │   │
//! │  │  - handle_*() - user intents                         │   │
//! │  │  - dispatch() - AppState::apply + run effects        │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - wallets, activity feed, channel, dialogs          │   │
//! │  │  - written only from this thread                     │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────▲─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────┴─────────────────────────────────────┐
//! │              Background Tasks (Tokio)                       │
//! │  - clock timer (1 s) / activity timer (15 s)                │
//! │  - resolver, notifier and chain subscription tasks          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Background tasks never write the state. They post an [`AppEvent`], which
//! `on_tick()` turns into an [`Intent`] and applies on the UI thread, so
//! intents are applied one at a time in arrival order.
//!
//! ## Resource Ownership
//!
//! Timers are held in [`TimerHandle`]s and chain subscriptions in
//! [`Subscription`]s; both abort their task on drop. [`App::shutdown`] (also
//! run when the `App` is dropped) releases all of them.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state and dialog forms
//! - [`intent`]: Intents, effects and the reducer environment
//! - [`events`]: Event enum for async communication

mod event_handler;
mod events;
mod handlers;
pub mod intent;
pub mod state;
mod tasks;
#[cfg(test)]
pub(crate) mod test_support;

pub use events::AppEvent;
pub use intent::{Effect, Env, Intent};
pub use state::*;
pub use tasks::{Subscription, TimerHandle};

use std::collections::HashMap;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use shared::dto::WalletId;
use tokio::runtime::Handle;

use crate::config::AppConfig;
use crate::core::clock::{Clock, SystemClock};
use crate::core::service::Services;

/// Main application orchestrator.
///
/// Owns the shared state, the event channel, the RNG and clock used by the
/// reducer, the optional ports and every background task handle.
pub struct App {
    /// Shared application state.
    ///
    /// Read it for rendering; write it only for form field edits. Everything
    /// else goes through [`App::dispatch`].
    pub state: Arc<RwLock<AppState>>,

    /// Receiver for background task results, polled in `on_tick()`
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    config: AppConfig,
    services: Services,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
    runtime: Handle,
    timers: Vec<TimerHandle>,
    /// Pending "test sent" expiry, replaced by each new test
    test_expiry: Option<TimerHandle>,
    subscriptions: HashMap<WalletId, Subscription>,
}

impl App {
    /// App with no ports, the system clock and an OS-seeded RNG
    pub fn new(config: AppConfig, runtime: Handle) -> Self {
        Self::with_parts(
            config,
            Services::none(),
            Arc::new(SystemClock),
            Box::new(StdRng::from_os_rng()),
            runtime,
        )
    }

    /// Build the app and start its timers on `runtime`.
    ///
    /// The activity timer only runs when no chain event source is configured.
    pub fn with_parts(
        config: AppConfig,
        services: Services,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RngCore + Send>,
        runtime: Handle,
    ) -> Self {
        let state = AppState::new(&config, clock.now());
        let (event_tx, event_rx) = unbounded();

        let mut app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            config,
            services,
            clock,
            rng,
            runtime,
            timers: Vec::new(),
            test_expiry: None,
            subscriptions: HashMap::new(),
        };
        app.start();

        tracing::info!(
            services = ?app.services,
            wallets = app.state.read().wallets.len(),
            "App state initialized"
        );
        app
    }

    fn start(&mut self) {
        self.timers.push(tasks::timers::spawn_interval(
            &self.runtime,
            "clock",
            self.config.clock_interval(),
            AppEvent::ClockTick,
            self.event_tx.clone(),
        ));

        if self.services.chain.is_none() {
            self.timers.push(tasks::timers::spawn_interval(
                &self.runtime,
                "activity",
                self.config.activity_interval(),
                AppEvent::ActivityTick,
                self.event_tx.clone(),
            ));
        } else {
            let effects: Vec<Effect> = self
                .state
                .read()
                .wallets
                .list()
                .iter()
                .map(|w| Effect::Subscribe {
                    id: w.id,
                    address: w.address.clone(),
                    network: w.network,
                })
                .collect();
            self.run_effects(effects);
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Clone of the current state for rendering
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Drain toasts queued by the reducer
    pub fn take_notifications(&self) -> Vec<Notification> {
        self.state.write().take_notifications()
    }

    /// Apply an intent and run the effects it requests
    pub fn dispatch(&mut self, intent: Intent) {
        let effects = {
            let mut state = self.state.write();
            let mut env = Env::new(&mut *self.rng, &*self.clock);
            state.apply(intent, &mut env)
        };
        self.run_effects(effects);
    }

    /// Called every frame to process async events.
    ///
    /// Non-blocking: handles whatever is queued and returns.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: Processed events from event channel");
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ResolveWallet { id, address, network } => {
                    if let Some(resolver) = &self.services.resolver {
                        tasks::ports::resolve_wallet(
                            &self.runtime,
                            Arc::clone(resolver),
                            id,
                            address,
                            network,
                            self.event_tx.clone(),
                        );
                    }
                }
                Effect::Deliver { config, event } => {
                    if let Some(notifier) = &self.services.notifier {
                        tasks::ports::deliver(
                            &self.runtime,
                            Arc::clone(notifier),
                            config,
                            event,
                            self.event_tx.clone(),
                        );
                    }
                }
                Effect::Subscribe { id, address, network } => {
                    if let Some(chain) = &self.services.chain {
                        let subscription = tasks::ports::subscribe(
                            &self.runtime,
                            Arc::clone(chain),
                            id,
                            &address,
                            network,
                            self.event_tx.clone(),
                        );
                        self.subscriptions.insert(id, subscription);
                    }
                }
                Effect::Unsubscribe { id } => {
                    self.subscriptions.remove(&id);
                }
                Effect::ScheduleTestExpiry { ticket, after } => {
                    self.test_expiry = Some(tasks::timers::spawn_once(
                        &self.runtime,
                        "test_notification",
                        after,
                        AppEvent::TestHoldElapsed(ticket),
                        self.event_tx.clone(),
                    ));
                }
                Effect::CancelTestExpiry => {
                    self.test_expiry = None;
                }
            }
        }
    }

    pub fn handle_open_add_wallet(&mut self) {
        self.dispatch(Intent::OpenAddWallet);
    }

    pub fn handle_open_channel_setup(&mut self) {
        self.dispatch(Intent::OpenChannelSetup);
    }

    pub fn handle_close_modal(&mut self) {
        self.dispatch(Intent::CloseModal);
    }

    /// Submit the add-wallet form as it is in the state
    pub fn handle_add_wallet_submit(&mut self) {
        self.dispatch(Intent::SubmitAddWallet);
    }

    pub fn handle_toggle_alerts(&mut self, id: WalletId) {
        self.dispatch(Intent::ToggleAlerts(id));
    }

    pub fn handle_remove_wallet(&mut self, id: WalletId) {
        self.dispatch(Intent::RemoveWallet(id));
    }

    /// Submit the channel form as it is in the state
    pub fn handle_channel_submit(&mut self) {
        self.dispatch(Intent::SubmitChannelSetup);
    }

    pub fn handle_disconnect_channel(&mut self) {
        self.dispatch(Intent::DisconnectChannel);
    }

    pub fn handle_send_test_notification(&mut self) {
        self.dispatch(Intent::SendTestNotification);
    }

    /// Interval timers whose task is still running
    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Stop all timers and chain subscriptions
    pub fn shutdown(&mut self) {
        self.test_expiry = None;
        if self.timers.is_empty() && self.subscriptions.is_empty() {
            return;
        }
        let names: Vec<&str> = self.timers.iter().map(TimerHandle::name).collect();
        tracing::info!(
            timers = ?names,
            subscriptions = self.subscriptions.len(),
            "Releasing background tasks"
        );
        self.timers.clear();
        self.subscriptions.clear();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::error::{AppError, Result};
    use crate::core::service::{ChainEventSource, NotificationSender, WalletStateResolver};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use futures::stream::{self, BoxStream, StreamExt};
    use parking_lot::Mutex;
    use shared::dto::{
        ActivityEvent, ActivityId, ActivityKind, AlertPreferences, ChannelConfig, NewWallet,
        Network, WalletSnapshot,
    };
    use std::time::Duration;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn build(services: Services) -> App {
        build_with(
            AppConfig {
                seed_demo_data: false,
                ..AppConfig::default()
            },
            services,
        )
    }

    fn build_with(config: AppConfig, services: Services) -> App {
        App::with_parts(
            config,
            services,
            Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap())),
            Box::new(StdRng::seed_from_u64(11)),
            Handle::current(),
        )
    }

    fn whale(label: &str) -> NewWallet {
        NewWallet {
            address: format!("0x{label}"),
            label: label.to_string(),
            network: Network::Eth,
            alerts_enabled: true,
        }
    }

    struct FixedResolver;

    #[async_trait]
    impl WalletStateResolver for FixedResolver {
        async fn resolve(&self, _address: &str, network: Network) -> Result<WalletSnapshot> {
            Ok(WalletSnapshot {
                balance: format!("42 {}", network.symbol()),
                last_activity: "just now".to_string(),
            })
        }
    }

    struct DownResolver;

    #[async_trait]
    impl WalletStateResolver for DownResolver {
        async fn resolve(&self, _address: &str, _network: Network) -> Result<WalletSnapshot> {
            Err(AppError::Resolver("node unreachable".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, ActivityKind)>>,
    }

    #[async_trait]
    impl NotificationSender for RecordingSender {
        async fn send(&self, channel: &ChannelConfig, event: &ActivityEvent) -> Result<()> {
            self.sent.lock().push((channel.chat_id.clone(), event.kind));
            Ok(())
        }
    }

    struct RejectingSender;

    #[async_trait]
    impl NotificationSender for RejectingSender {
        async fn send(&self, _channel: &ChannelConfig, _event: &ActivityEvent) -> Result<()> {
            Err(AppError::Notification("chat not found".to_string()))
        }
    }

    fn connect_all_alerts(app: &mut App) {
        {
            let mut state = app.state.write();
            state.channel_form.bot_token = "123:abc".to_string();
            state.channel_form.chat_id = "-1001".to_string();
            state.channel_form.preferences = AlertPreferences {
                large_transfers: true,
                swaps: true,
                nft_activity: true,
                staking: true,
            };
        }
        app.handle_channel_submit();
        assert!(app.snapshot().channel.is_connected());
    }

    struct OneShotChain;

    impl ChainEventSource for OneShotChain {
        fn subscribe(&self, address: &str, _network: Network) -> BoxStream<'static, ActivityEvent> {
            let event = ActivityEvent {
                id: ActivityId::from_random_bytes([3; 16]),
                wallet_label: address.to_string(),
                kind: ActivityKind::Transfer,
                amount: "7 ETH".to_string(),
                timestamp: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
                hash: "0x00000001...0002".to_string(),
            };
            stream::iter(vec![event]).boxed()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_timer_fills_feed() {
        let mut app = build(Services::none());
        assert_eq!(app.active_timers(), 2);
        app.dispatch(Intent::AddWallet(whale("A")));

        settle().await;
        tokio::time::advance(Duration::from_millis(15_000)).await;
        settle().await;
        app.on_tick();

        let state = app.snapshot();
        assert_eq!(state.activity.len(), 1);
        assert_eq!(state.activity.list()[0].wallet_label, "A");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_timers() {
        let mut app = build(Services::none());
        app.dispatch(Intent::AddWallet(whale("A")));
        settle().await;

        app.shutdown();
        assert_eq!(app.active_timers(), 0);

        tokio::time::advance(Duration::from_millis(60_000)).await;
        settle().await;
        app.on_tick();
        assert!(app.snapshot().activity.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_without_resolver_placeholders_stay() {
        let mut app = build(Services::none());
        app.dispatch(Intent::AddWallet(whale("A")));
        settle().await;
        app.on_tick();

        assert_eq!(app.snapshot().wallets.list()[0].balance, "---");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolver_updates_wallet() {
        let mut app = build(Services::none().with_resolver(Arc::new(FixedResolver)));
        app.dispatch(Intent::AddWallet(whale("A")));
        settle().await;
        app.on_tick();

        let wallet = app.snapshot().wallets.list()[0].clone();
        assert_eq!(wallet.balance, "42 ETH");
        assert_eq!(wallet.last_activity, "just now");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolver_failure_is_surfaced() {
        let mut app = build(Services::none().with_resolver(Arc::new(DownResolver)));
        app.dispatch(Intent::AddWallet(whale("A")));
        app.take_notifications();
        settle().await;
        app.on_tick();

        assert_eq!(app.snapshot().wallets.list()[0].balance, "---");
        let toasts = app.take_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, NotificationLevel::Warning);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alerts_are_delivered_through_notifier() {
        let sender = Arc::new(RecordingSender::default());
        let mut app = build(Services::none().with_notifier(sender.clone()));
        app.dispatch(Intent::AddWallet(whale("A")));
        connect_all_alerts(&mut app);

        app.dispatch(Intent::GenerateActivity);
        settle().await;
        app.on_tick();

        let sent = sender.sent.lock().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "-1001");
        assert_eq!(sent[0].1, app.snapshot().activity.list()[0].kind);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_failure_is_surfaced() {
        let mut app = build(Services::none().with_notifier(Arc::new(RejectingSender)));
        app.dispatch(Intent::AddWallet(whale("A")));
        connect_all_alerts(&mut app);
        app.take_notifications();

        app.dispatch(Intent::GenerateActivity);
        settle().await;
        app.on_tick();

        let toasts = app.take_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, NotificationLevel::Error);
        assert_eq!(toasts[0].message, "Notification failed: Notification error: chat not found");
    }

    #[tokio::test(start_paused = true)]
    async fn test_test_confirmation_clears_at_hold_regardless_of_clock_interval() {
        let mut app = build_with(
            AppConfig {
                seed_demo_data: false,
                clock_interval_ms: 10_000,
                ..AppConfig::default()
            },
            Services::none(),
        );
        connect_all_alerts(&mut app);
        app.handle_send_test_notification();
        assert!(app.snapshot().channel.test_pending());

        settle().await;
        tokio::time::advance(Duration::from_millis(2_999)).await;
        settle().await;
        app.on_tick();
        assert!(app.snapshot().channel.test_pending());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        app.on_tick();
        assert!(!app.snapshot().channel.test_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resend_restarts_hold() {
        let mut app = build(Services::none());
        connect_all_alerts(&mut app);
        app.handle_send_test_notification();

        settle().await;
        tokio::time::advance(Duration::from_millis(2_000)).await;
        settle().await;
        app.handle_send_test_notification();

        settle().await;
        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;
        app.on_tick();
        assert!(app.snapshot().channel.test_pending());

        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;
        app.on_tick();
        assert!(!app.snapshot().channel.test_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_cancels_pending_expiry() {
        let mut app = build(Services::none());
        connect_all_alerts(&mut app);
        app.handle_send_test_notification();
        assert!(app.test_expiry.is_some());

        app.handle_disconnect_channel();
        assert!(app.test_expiry.is_none());

        settle().await;
        tokio::time::advance(Duration::from_millis(5_000)).await;
        settle().await;
        while let Ok(event) = app.event_rx.try_recv() {
            assert!(!matches!(event, AppEvent::TestHoldElapsed(_)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_chain_source_replaces_generator() {
        let mut app = build(Services::none().with_chain(Arc::new(OneShotChain)));
        assert_eq!(app.active_timers(), 1);

        app.dispatch(Intent::AddWallet(whale("A")));
        assert_eq!(app.subscription_count(), 1);
        settle().await;
        app.on_tick();

        let state = app.snapshot();
        assert_eq!(state.activity.len(), 1);
        assert_eq!(state.activity.list()[0].amount, "7 ETH");

        let id = state.wallets.list()[0].id;
        app.handle_remove_wallet(id);
        assert_eq!(app.subscription_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_modal_flow_through_handlers() {
        let mut app = build(Services::none());
        app.handle_open_add_wallet();
        assert_eq!(app.snapshot().modal, Some(Modal::AddWallet));

        {
            let mut state = app.state.write();
            state.add_wallet_form.address = "0xabc".to_string();
            state.add_wallet_form.label = "Whale1".to_string();
        }
        app.handle_add_wallet_submit();

        let state = app.snapshot();
        assert_eq!(state.modal, None);
        assert_eq!(state.wallets.len(), 1);
        assert_eq!(state.wallets.list()[0].label, "Whale1");
    }
}
