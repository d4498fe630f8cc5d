use std::sync::Mutex;
use crate::errors::SiteSageResult;
use crate::structs::auth::stored_auth::StoredAuth;
use crate::structs::auth::user::User;
use crate::traits::token_store::TokenStore;

/// Token store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<StoredAuth>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str, user: User) -> Self {
        Self {
            inner: Mutex::new(StoredAuth {
                token: Some(token.to_string()),
                user: Some(user),
            }),
        }
    }

    fn read(&self) -> StoredAuth {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.read().token
    }

    fn get_user(&self) -> Option<User> {
        self.read().user
    }

    fn set_token(&self, token: &str, user: &User) -> SiteSageResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.token = Some(token.to_string());
        guard.user = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> SiteSageResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = StoredAuth::default();
        Ok(())
    }
}
