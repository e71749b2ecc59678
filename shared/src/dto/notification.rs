use serde::{Deserialize, Serialize};

use crate::dto::activity::ActivityKind;

/// Which activity kinds the channel should be told about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPreferences {
    /// Large transfers (>$100k)
    pub large_transfers: bool,
    pub swaps: bool,
    /// Mints are reported as NFT activity
    pub nft_activity: bool,
    pub staking: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            large_transfers: true,
            swaps: true,
            nft_activity: false,
            staking: true,
        }
    }
}

impl AlertPreferences {
    pub fn allows(&self, kind: ActivityKind) -> bool {
        match kind {
            ActivityKind::Transfer => self.large_transfers,
            ActivityKind::Swap => self.swaps,
            ActivityKind::Mint => self.nft_activity,
            ActivityKind::Stake => self.staking,
        }
    }
}

/// Telegram-style bot channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub preferences: AlertPreferences,
}
