use crate::errors::SiteSageResult;
use crate::structs::auth::user::User;

/// Where the bearer credential lives between commands.
pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;

    fn get_user(&self) -> Option<User>;

    fn set_token(&self, token: &str, user: &User) -> SiteSageResult<()>;

    fn clear(&self) -> SiteSageResult<()>;
}
