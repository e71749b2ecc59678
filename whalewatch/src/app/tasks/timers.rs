//! # Timers
//!
//! Periodic and one-shot tasks that post an [`AppEvent`] to the UI thread.
//! Each task is owned by a [`TimerHandle`]; dropping the handle stops the task.

use std::time::Duration;

use async_channel::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::app::events::AppEvent;

/// Owns a timer task and aborts it on drop
#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!(timer = self.name, "Timer stopped");
    }
}

/// Post `event` every `period`, starting one period from now.
///
/// Missed ticks are skipped rather than burst. The task also ends on its own
/// once the receiving side of `event_tx` is gone.
pub(crate) fn spawn_interval(
    runtime: &Handle,
    name: &'static str,
    period: Duration,
    event: AppEvent,
    event_tx: Sender<AppEvent>,
) -> TimerHandle {
    let task = runtime.spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if event_tx.send(event.clone()).await.is_err() {
                debug!(timer = name, "Event channel closed, timer exiting");
                break;
            }
        }
    });

    info!(timer = name, period_ms = period.as_millis() as u64, "Timer started");
    TimerHandle { name, task }
}

/// Post `event` once, `delay` from now
pub(crate) fn spawn_once(
    runtime: &Handle,
    name: &'static str,
    delay: Duration,
    event: AppEvent,
    event_tx: Sender<AppEvent>,
) -> TimerHandle {
    let task = runtime.spawn(async move {
        sleep(delay).await;
        if event_tx.send(event).await.is_err() {
            debug!(timer = name, "Event channel closed before timer fired");
        }
    });

    debug!(timer = name, delay_ms = delay.as_millis() as u64, "One-shot timer armed");
    TimerHandle { name, task }
}
