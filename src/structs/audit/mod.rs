pub mod audit;
pub mod audit_request;
pub mod canonical_audit_view;
pub mod legacy_insights;
pub mod legacy_metrics;
pub mod reconcile_report;
pub mod resolved_field;
