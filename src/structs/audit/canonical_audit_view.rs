use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::enums::audit_status::AuditStatus;
use crate::enums::score_band::ScoreBand;
use crate::helpers::time_helper::relative_time;
use crate::structs::audit::audit::parse_timestamp;
use crate::structs::audit::resolved_field::ResolvedField;

/// Schema-unified representation of an audit, built by
/// [`crate::services::audit_normalizer::normalize`]. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalAuditView {
    pub id: String,
    pub url: String,
    pub status: AuditStatus,
    pub created_at: String,
    pub completed_at: Option<String>,

    pub score: Option<ResolvedField<f64>>,
    pub load_time_ms: ResolvedField<f64>,
    pub images_without_alt: ResolvedField<u64>,
    pub recommendations: ResolvedField<Vec<String>>,
    pub title: ResolvedField<String>,
    pub meta_description: ResolvedField<String>,
    pub summary: Option<ResolvedField<String>>,

    pub images_total: u64,
    pub internal_links: u64,
    pub external_links: u64,
    pub broken_links: Option<u64>,
    pub h1_tags: Vec<String>,
    pub h2_tags: Vec<String>,
    pub issues: Vec<String>,
    pub pdf_url: Option<String>,

    /// Only set for failed audits.
    pub error_message: Option<String>,
}

impl CanonicalAuditView {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    pub fn score_value(&self) -> Option<f64> {
        self.score.as_ref().map(|s| s.value)
    }

    pub fn score_band(&self) -> Option<ScoreBand> {
        self.score_value().map(ScoreBand::from_score)
    }

    pub fn total_links(&self) -> u64 {
        self.internal_links + self.external_links
    }

    /// `"1200ms"`
    pub fn speed_label(&self) -> String {
        format!("{}ms", self.load_time_ms.value)
    }

    /// Report summary, falling back to the score band headline.
    pub fn headline(&self) -> String {
        if let Some(summary) = &self.summary {
            return summary.value.clone();
        }
        ScoreBand::from_score(self.score_value().unwrap_or(0.0))
            .headline()
            .to_string()
    }

    pub fn has_results(&self) -> bool {
        self.status == AuditStatus::Completed
    }

    /// `"5 minutes ago"`, or the raw `created_at` when it cannot be parsed.
    pub fn created_ago(&self, now: DateTime<Utc>) -> String {
        parse_timestamp(&self.created_at)
            .map(|created| relative_time(created, now))
            .unwrap_or_else(|| self.created_at.clone())
    }
}
