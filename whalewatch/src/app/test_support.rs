//! Shared fixtures for reducer tests.

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::intent::{Effect, Env, Intent};
use super::state::AppState;
use crate::config::AppConfig;
use crate::core::clock::{Clock, ManualClock};

/// State plus a seeded RNG and a manual clock
pub(crate) struct Harness {
    pub state: AppState,
    pub rng: StdRng,
    pub clock: ManualClock,
}

impl Harness {
    pub fn new(seed_demo_data: bool) -> Self {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap());
        let config = AppConfig {
            seed_demo_data,
            ..AppConfig::default()
        };
        Self {
            state: AppState::new(&config, clock.now()),
            rng: StdRng::seed_from_u64(5),
            clock,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        let mut env = Env::new(&mut self.rng, &self.clock);
        self.state.apply(intent, &mut env)
    }
}
