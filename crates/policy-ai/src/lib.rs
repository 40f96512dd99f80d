pub mod config;
pub mod error;
pub mod generation;
pub mod telemetry;
