pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod read;
pub mod telemetry;
pub mod write;
