use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::auth_config::AuthConfig;
use crate::structs::config::polling_config::PollingConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}
