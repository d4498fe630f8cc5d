//! Maps raw [`Audit`] records, in either response schema, to the single
//! [`CanonicalAuditView`] the presentation layer reads.
//!
//! Precedence is fixed: the flat field wins whenever it is defined, the
//! legacy nested field is used otherwise, and a display default fills in
//! when neither exists.

use crate::config::constants::{DEFAULT_AUDIT_FAILURE_MESSAGE, NOT_FOUND_TEXT};
use crate::enums::audit_status::AuditStatus;
use crate::enums::field_source::FieldSource;
use crate::structs::audit::audit::Audit;
use crate::structs::audit::canonical_audit_view::CanonicalAuditView;
use crate::structs::audit::resolved_field::ResolvedField;

/// Picks the flat value if defined, else the legacy one.
pub fn resolve<T>(flat: Option<T>, legacy: Option<T>) -> Option<ResolvedField<T>> {
    match (flat, legacy) {
        (Some(value), _) => Some(ResolvedField::new(value, FieldSource::Flat)),
        (None, Some(value)) => Some(ResolvedField::new(value, FieldSource::Legacy)),
        (None, None) => None,
    }
}

pub fn resolve_or<T>(flat: Option<T>, legacy: Option<T>, fallback: T) -> ResolvedField<T> {
    resolve(flat, legacy).unwrap_or_else(|| ResolvedField::new(fallback, FieldSource::Fallback))
}

pub fn normalize(audit: &Audit) -> CanonicalAuditView {
    let metrics = audit.metrics.as_ref();
    let insights = audit.insights.as_ref();

    let suggestions = audit.suggestions.clone().filter(|s| !s.is_empty());

    let error_message = match audit.status {
        AuditStatus::Failed => Some(
            audit.error_message
                .clone()
                .unwrap_or_else(|| DEFAULT_AUDIT_FAILURE_MESSAGE.to_string()),
        ),
        _ => None,
    };

    CanonicalAuditView {
        id: audit.id.clone(),
        url: audit.url.clone(),
        status: audit.status,
        created_at: audit.created_at.clone(),
        completed_at: audit.completed_at.clone(),

        score: resolve(audit.seo_score, audit.legacy_seo_score),
        load_time_ms: resolve_or(audit.page_load_time_ms, metrics.and_then(|m| m.load_time), 0.0),
        images_without_alt: resolve_or(audit.images_without_alt, metrics.and_then(|m| m.images_without_alt), 0),
        recommendations: resolve_or(suggestions, insights.and_then(|i| i.recommendations.clone()), Vec::new()),
        title: resolve_or(
            audit.title.clone(),
            metrics.and_then(|m| m.title.clone()),
            NOT_FOUND_TEXT.to_string(),
        ),
        meta_description: resolve_or(
            audit.meta_description.clone(),
            metrics.and_then(|m| m.meta_description.clone()),
            NOT_FOUND_TEXT.to_string(),
        ),
        summary: resolve(audit.summary.clone(), insights.and_then(|i| i.summary.clone())),

        images_total: audit.images_total.unwrap_or(0),
        internal_links: audit.internal_links.unwrap_or(0),
        external_links: audit.external_links.unwrap_or(0),
        broken_links: metrics.and_then(|m| m.broken_links),
        h1_tags: audit.h1_tags.clone().unwrap_or_default(),
        h2_tags: audit.h2_tags.clone().unwrap_or_default(),
        issues: audit.issues.clone().unwrap_or_default(),
        pdf_url: audit.pdf_url.clone(),

        error_message,
    }
}

pub fn normalize_all(audits: &[Audit]) -> Vec<CanonicalAuditView> {
    audits.iter().map(normalize).collect()
}
