pub mod config_helper;
pub mod submission_form;
pub mod time_helper;
