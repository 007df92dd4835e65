//! Engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When depositing Fire emits its (looping ambience) deposit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FireDepositPolicy {
    /// Every Fire deposit emits the event
    Always,
    /// Only while segmentation tinting is engaged
    #[default]
    WhenTinting,
}

/// Interaction engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum time between two touch events for the same element
    pub touch_cooldown_ms: u64,
    pub fire_deposit: FireDepositPolicy,
    /// Forget touch timestamps on reset
    pub reset_clears_cooldowns: bool,
    /// Initial state of the segmentation tinting switch
    pub tinting: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            touch_cooldown_ms: 1000,
            fire_deposit: FireDepositPolicy::WhenTinting,
            reset_clears_cooldowns: false,
            tinting: true,
        }
    }
}

impl EngineConfig {
    /// Fire deposit always audible, cooldowns cleared on reset
    pub fn unconditional_fire() -> Self {
        Self {
            fire_deposit: FireDepositPolicy::Always,
            reset_clears_cooldowns: true,
            ..Default::default()
        }
    }

    pub fn touch_cooldown(&self) -> Duration {
        Duration::from_millis(self.touch_cooldown_ms)
    }
}
