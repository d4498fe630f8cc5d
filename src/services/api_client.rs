use std::sync::Arc;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use crate::config::constants::{
    AUDITS_ENDPOINT, DEFAULT_SERVICE_ERROR_MESSAGE, LOGIN_ENDPOINT, MAX_URLS_PER_SUBMISSION, SIGNUP_ENDPOINT,
};
use crate::errors::{SiteSageError, SiteSageResult};
use crate::structs::api_response::ApiResponse;
use crate::structs::audit::audit::Audit;
use crate::structs::audit::audit_request::AuditRequest;
use crate::structs::auth::auth_session::AuthSession;
use crate::structs::auth::credentials::Credentials;
use crate::structs::auth::user::User;
use crate::traits::audit_service::AuditService;
use crate::traits::token_store::TokenStore;

/// HTTP client for the SiteSage audit service.
///
/// Every audit call carries the stored bearer token; when no token is
/// stored the call fails with [`SiteSageError::AuthError`] before any
/// request is sent.
#[derive(Clone)]
pub struct SiteSageClient {
    base_url: String,
    client: Client,
    token_store: Arc<dyn TokenStore>,
}

impl SiteSageClient {
    pub fn new(base_url: &str, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token_store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn current_user(&self) -> Option<User> {
        self.token_store.get_user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token_store.get_token().is_some()
    }

    pub async fn signup(&self, email: &str, password: &str) -> SiteSageResult<AuthSession> {
        self.authenticate("signup", SIGNUP_ENDPOINT, email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> SiteSageResult<AuthSession> {
        self.authenticate("login", LOGIN_ENDPOINT, email, password).await
    }

    pub fn logout(&self) -> SiteSageResult<()> {
        self.token_store.clear()
    }

    async fn authenticate(&self, operation: &str, endpoint: &str, email: &str, password: &str) -> SiteSageResult<AuthSession> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::debug!("🔐 {} for {:?}", operation, credentials);

        let request = self.client.post(self.endpoint(endpoint)).json(&credentials);
        let session: AuthSession = self.send(operation, request).await?;

        self.token_store.set_token(&session.token, &session.user)?;
        log::info!("✅ Signed in as {}", session.user.email);

        Ok(session)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer_token(&self, operation: &str) -> SiteSageResult<String> {
        self.token_store
            .get_token()
            .ok_or_else(|| SiteSageError::auth_error(operation, "no stored credential"))
    }

    fn authorized(&self, request: RequestBuilder, operation: &str) -> SiteSageResult<RequestBuilder> {
        let token = self.bearer_token(operation)?;
        Ok(request.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, operation: &str, request: RequestBuilder) -> SiteSageResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| SiteSageError::network_error(operation, e.url().map(|u| u.as_str()), &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&error_text);
            log::debug!("❌ {} failed with HTTP {}: {}", operation, status, message);
            return Err(SiteSageError::service_error(operation, status.as_u16(), &message));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        log::debug!("{} -> {} {}", operation, envelope.status, envelope.message);
        Ok(envelope.data)
    }
}

/// Pulls `message` out of a JSON error body, otherwise passes the raw
/// text through.
fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return DEFAULT_SERVICE_ERROR_MESSAGE.to_string();
    }

    serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| trimmed.to_string())
}

#[async_trait]
impl AuditService for SiteSageClient {
    async fn submit(&self, request: AuditRequest) -> SiteSageResult<Vec<Audit>> {
        if request.urls.is_empty() {
            return Err(SiteSageError::validation_error(
                "urls",
                "0",
                "at least one URL is required",
                None,
            ));
        }
        if request.urls.len() > MAX_URLS_PER_SUBMISSION {
            return Err(SiteSageError::validation_error(
                "urls",
                &request.urls.len().to_string(),
                &format!("at most {} URLs per submission", MAX_URLS_PER_SUBMISSION),
                None,
            ));
        }

        let builder = self.client.post(self.endpoint(AUDITS_ENDPOINT)).json(&request);
        let builder = self.authorized(builder, "submit audits")?;
        let audits: Vec<Audit> = self.send("submit audits", builder).await?;

        log::info!("🚀 Created {} audit(s)", audits.len());
        Ok(audits)
    }

    async fn list(&self) -> SiteSageResult<Vec<Audit>> {
        let builder = self.authorized(self.client.get(self.endpoint(AUDITS_ENDPOINT)), "list audits")?;
        self.send("list audits", builder).await
    }

    async fn get(&self, id: &str) -> SiteSageResult<Audit> {
        let path = format!("{}/{}", AUDITS_ENDPOINT, id);
        let builder = self.authorized(self.client.get(self.endpoint(&path)), "fetch audit")?;
        self.send("fetch audit", builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(extract_error_message(r#"{"status":400,"message":"bad url"}"#), "bad url");
        assert_eq!(extract_error_message("upstream exploded"), "upstream exploded");
        assert_eq!(extract_error_message("   "), DEFAULT_SERVICE_ERROR_MESSAGE);
        assert_eq!(extract_error_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let store = Arc::new(crate::services::token_stores::memory_token_store::MemoryTokenStore::new());
        let client = SiteSageClient::new("https://api.example.com/", store);
        assert_eq!(client.endpoint(AUDITS_ENDPOINT), "https://api.example.com/api/audits");
        assert!(!client.is_logged_in());
        assert!(client.current_user().is_none());
    }

    #[test]
    fn current_user_comes_from_token_store() {
        let user = User {
            id: "u1".to_string(),
            email: "dev@example.com".to_string(),
        };
        let store = Arc::new(crate::services::token_stores::memory_token_store::MemoryTokenStore::with_token(
            "tok",
            user.clone(),
        ));
        let client = SiteSageClient::new("https://api.example.com", store);

        assert!(client.is_logged_in());
        assert_eq!(client.current_user(), Some(user));
    }
}
