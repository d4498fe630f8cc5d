use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub interval_ms: u64,
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: ConfigHelper::default_poll_interval_ms(),
        }
    }
}
