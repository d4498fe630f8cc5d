pub mod audit_service;
pub mod token_store;
