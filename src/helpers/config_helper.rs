use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_POLL_INTERVAL_MS};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_poll_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }
}
