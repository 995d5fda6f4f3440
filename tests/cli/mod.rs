//! CLI integration test modules

pub mod check_command;
pub mod exit_status;
pub mod show_command;
pub mod version_command;
