use async_trait::async_trait;
use crate::errors::SiteSageResult;
use crate::structs::audit::audit::Audit;
use crate::structs::audit::audit_request::AuditRequest;

/// Typed boundary to the remote audit service. Implementations hold no
/// session state and never touch the audit collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Creates one audit per URL; every returned audit starts `pending`.
    async fn submit(&self, request: AuditRequest) -> SiteSageResult<Vec<Audit>>;

    /// All audits of the authenticated caller, most recent first.
    async fn list(&self) -> SiteSageResult<Vec<Audit>>;

    async fn get(&self, id: &str) -> SiteSageResult<Audit>;
}
