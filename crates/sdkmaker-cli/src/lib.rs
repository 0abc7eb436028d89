pub mod config;
pub mod fetch;
pub mod npm;
pub mod orchestrator;
