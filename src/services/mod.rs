pub mod api_client;
pub mod audit_normalizer;
pub mod audit_store;
pub mod dashboard_session;
pub mod poll_timer;
pub mod polling_scheduler;
pub mod token_stores;
