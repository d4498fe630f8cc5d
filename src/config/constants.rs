use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const MAX_URLS_PER_SUBMISSION: usize = 5;

pub const API_URL_ENV: &str = "SITESAGE_API_URL";

pub const CONFIG_DIR_NAME: &str = "sitesage";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const TOKEN_FILE_NAME: &str = "auth.json";

pub const AUDITS_ENDPOINT: &str = "/api/audits";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

pub const NOT_FOUND_TEXT: &str = "Not found";
pub const DEFAULT_SERVICE_ERROR_MESSAGE: &str = "An error occurred";
pub const DEFAULT_AUDIT_FAILURE_MESSAGE: &str = "An error occurred during analysis";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
