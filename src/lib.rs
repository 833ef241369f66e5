//! AWS Elastic Load Balancer instance health check.
//!
//! Asks the ELB API for the health of every instance registered with a load
//! balancer and reduces the answer to a single monitoring verdict.

pub mod aws;
pub mod config;
pub mod error;
pub mod health;
pub mod observability;
pub mod probe;

pub use config::CheckConfig;
pub use error::CheckError;
pub use health::{Status, Verdict};
pub use probe::HealthCheck;
