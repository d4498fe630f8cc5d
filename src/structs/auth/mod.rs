pub mod auth_session;
pub mod credentials;
pub mod stored_auth;
pub mod user;
