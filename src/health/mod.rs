//! Health evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! Evaluator (evaluator.rs)
//!     → HealthSource::describe_instance_health (source.rs)
//!     → HealthReport (report.rs)
//!     → UnhealthyMembers (state != "InService")
//!     → Verdict (verdict.rs)
//! ```
//!
//! # Design Decisions
//! - Allow-list of one healthy state; anything else is unhealthy
//! - An empty report is a failure, never "trivially healthy"
//! - Verbosity changes the message only, never the status

pub mod evaluator;
pub mod report;
pub mod source;
pub mod verdict;

pub use evaluator::Evaluator;
pub use report::{HealthReport, MemberHealthRecord, IN_SERVICE};
pub use source::{HealthQuery, HealthSource};
pub use verdict::{Status, Verdict};
