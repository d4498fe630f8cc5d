use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pending,
    Completed,
    Failed,
}

impl AuditStatus {
    /// `completed` and `failed` never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AuditStatus::Completed | AuditStatus::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "Processing",
            AuditStatus::Completed => "Completed",
            AuditStatus::Failed => "Failed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AuditStatus::Pending => "⏳",
            AuditStatus::Completed => "✅",
            AuditStatus::Failed => "❌",
        }
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            AuditStatus::Pending => "pending",
            AuditStatus::Completed => "completed",
            AuditStatus::Failed => "failed",
        };
        write!(f, "{}", value)
    }
}
