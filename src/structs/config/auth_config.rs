use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AuthConfig {
    /// Overrides the default token file location.
    #[serde(default)]
    pub token_file: Option<String>,
}
