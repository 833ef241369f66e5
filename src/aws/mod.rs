//! AWS collaborators.
//!
//! # Data Flow
//! ```text
//! metadata.rs: GET placement/availability-zone (bounded wait) → ZoneSource
//!
//! elb.rs: DescribeInstanceHealth form body
//!     → signing.rs (SigV4)
//!     → POST to the regional endpoint
//!     → xml.rs (InstanceStates / ErrorResponse)
//!     → HealthSource
//! ```
//!
//! # Security Constraints
//! - Credentials arrive through `CheckConfig`; nothing here reads the environment
//! - Secrets never appear in logs or `Debug` output

pub mod elb;
pub mod metadata;
pub mod signing;
pub mod types;
pub mod xml;

pub use elb::ElbClient;
pub use metadata::MetadataClient;
pub use types::{AwsCredentials, HealthQueryError, RegionResolutionError};
