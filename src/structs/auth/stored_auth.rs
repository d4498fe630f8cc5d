use serde::{Deserialize, Serialize};
use crate::structs::auth::user::User;

/// On-disk layout of the token file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAuth {
    #[serde(rename = "sitesage_token", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(rename = "sitesage_user", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
