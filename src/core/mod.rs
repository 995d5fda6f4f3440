//! Core services shared by the library and the CLI

pub mod error_handling;
pub mod logging;
pub mod strings;
pub mod styles; // centralized styling palette for CLI output
pub mod version;
