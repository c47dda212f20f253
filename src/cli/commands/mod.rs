//! CLI command implementations.

mod config;
mod doctor;
mod fetch;
mod mcp;

pub use config::run_config;
pub use doctor::run_doctor;
pub use fetch::run_fetch;
pub use mcp::run_mcp;
