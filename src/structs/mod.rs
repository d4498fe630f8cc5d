pub mod api_response;
pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
