pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod identity;
pub mod telemetry;
