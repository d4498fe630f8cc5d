use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::audit_status::AuditStatus;
use crate::structs::audit::legacy_insights::LegacyInsights;
use crate::structs::audit::legacy_metrics::LegacyMetrics;

/// One analysis request/result pair for a single URL, as returned by the
/// audit service.
///
/// Result fields arrive in either the flat schema (`seoScore`, ...) or the
/// legacy nested one (`seo_score`, `metrics`, `insights`), sometimes both.
/// Use [`crate::services::audit_normalizer::normalize`] to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub id: String,
    pub url: String,
    pub status: AuditStatus,
    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    #[serde(rename = "errorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(rename = "seoScore", default, skip_serializing_if = "Option::is_none")]
    pub seo_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "metaDescription", default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(rename = "h1Tags", default, skip_serializing_if = "Option::is_none")]
    pub h1_tags: Option<Vec<String>>,

    #[serde(rename = "h2Tags", default, skip_serializing_if = "Option::is_none")]
    pub h2_tags: Option<Vec<String>>,

    #[serde(rename = "imagesTotal", default, skip_serializing_if = "Option::is_none")]
    pub images_total: Option<u64>,

    #[serde(rename = "imagesWithoutAlt", default, skip_serializing_if = "Option::is_none")]
    pub images_without_alt: Option<u64>,

    #[serde(rename = "internalLinks", default, skip_serializing_if = "Option::is_none")]
    pub internal_links: Option<u64>,

    #[serde(rename = "externalLinks", default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<u64>,

    #[serde(rename = "pageLoadTimeMs", default, skip_serializing_if = "Option::is_none")]
    pub page_load_time_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(rename = "pdfUrl", default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    // Legacy schema
    #[serde(rename = "seo_score", default, skip_serializing_if = "Option::is_none")]
    pub legacy_seo_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<LegacyMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<LegacyInsights>,
}

impl Audit {
    /// A freshly created audit with no results yet.
    pub fn pending(id: &str, url: &str, created_at: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            status: AuditStatus::Pending,
            created_at: created_at.to_string(),
            completed_at: None,
            error_message: None,
            seo_score: None,
            title: None,
            meta_description: None,
            h1_tags: None,
            h2_tags: None,
            images_total: None,
            images_without_alt: None,
            internal_links: None,
            external_links: None,
            page_load_time_ms: None,
            issues: None,
            suggestions: None,
            summary: None,
            pdf_url: None,
            legacy_seo_score: None,
            metrics: None,
            insights: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AuditStatus::Pending
    }

    /// `created_at` as a UTC timestamp. Accepts RFC 3339 and the naive
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` form some backends emit (read as UTC).
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_both_schemas_side_by_side() {
        let json = r#"{
            "id": "a1",
            "url": "https://example.com",
            "status": "completed",
            "created_at": "2025-12-19T00:00:00Z",
            "seoScore": 85,
            "pageLoadTimeMs": 1200,
            "pdfUrl": null,
            "seo_score": 40,
            "metrics": { "load_time": 3000, "title": "Legacy" },
            "insights": { "recommendations": ["Add alt text"] },
            "somethingNew": true
        }"#;

        let audit: Audit = serde_json::from_str(json).unwrap();
        assert_eq!(audit.status, AuditStatus::Completed);
        assert_eq!(audit.seo_score, Some(85.0));
        assert_eq!(audit.legacy_seo_score, Some(40.0));
        assert_eq!(audit.page_load_time_ms, Some(1200.0));
        assert_eq!(audit.pdf_url, None);
        assert_eq!(audit.metrics.as_ref().and_then(|m| m.load_time), Some(3000.0));
        assert_eq!(audit.metrics.as_ref().and_then(|m| m.title.clone()), Some("Legacy".to_string()));
    }

    #[test]
    fn parses_naive_and_rfc3339_timestamps() {
        let mut audit = Audit::pending("a1", "https://example.com", "2025-12-19T10:30:00.123456");
        assert!(audit.created_at_utc().is_some());

        audit.created_at = "2025-12-19T10:30:00+02:00".to_string();
        let parsed = audit.created_at_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-12-19T08:30:00+00:00");

        audit.created_at = "yesterday".to_string();
        assert!(audit.created_at_utc().is_none());
    }
}
