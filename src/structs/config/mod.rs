pub mod api_config;
pub mod auth_config;
pub mod config;
pub mod polling_config;
