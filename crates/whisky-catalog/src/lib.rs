pub mod config;
pub mod error;
pub mod producers;
pub mod telemetry;
