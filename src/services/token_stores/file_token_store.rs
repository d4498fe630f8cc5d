use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{SiteSageError, SiteSageResult};
use crate::structs::auth::stored_auth::StoredAuth;
use crate::structs::auth::user::User;
use crate::traits::token_store::TokenStore;

/// Persists the token and user as a small JSON file so that separate CLI
/// invocations share one login. The file is re-read on every access.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoredAuth {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return StoredAuth::default(),
        };

        match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable token file {}: {}", self.path.display(), e);
                StoredAuth::default()
            }
        }
    }

    fn save(&self, stored: &StoredAuth) -> SiteSageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(stored)?;
        fs::write(&self.path, content).map_err(|e| {
            SiteSageError::system_error("saving credentials", &format!("{}: {}", self.path.display(), e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Option<String> {
        self.load().token.filter(|t| !t.is_empty())
    }

    fn get_user(&self) -> Option<User> {
        self.load().user
    }

    fn set_token(&self, token: &str, user: &User) -> SiteSageResult<()> {
        self.save(&StoredAuth {
            token: Some(token.to_string()),
            user: Some(user.clone()),
        })
    }

    fn clear(&self) -> SiteSageResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
