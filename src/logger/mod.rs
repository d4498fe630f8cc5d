pub mod animated_logger;
pub mod audit_report_logger;
