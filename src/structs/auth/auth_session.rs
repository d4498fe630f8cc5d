use serde::{Deserialize, Serialize};
use crate::structs::auth::user::User;

/// `data` payload of the signup and login endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
