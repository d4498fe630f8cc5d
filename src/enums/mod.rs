pub mod audit_status;
pub mod commands;
pub mod crawler_mode;
pub mod field_source;
pub mod scheduler_action;
pub mod scheduler_state;
pub mod score_band;
pub mod watch_outcome;
