//! Check orchestration.
//!
//! # Data Flow
//! ```text
//! CheckConfig
//!     → region.rs (explicit region, or AZ lookup → strip zone letter)
//!     → runner.rs (Evaluator against the HealthSource)
//!     → Verdict
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: region first, then one health query
//! - Region failure is fatal; nothing is defaulted
//! - No retries anywhere

pub mod region;
pub mod runner;

pub use region::{region_from_zone, resolve_region, ZoneSource};
pub use runner::HealthCheck;
