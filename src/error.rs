//! Check-level failures.
//!
//! Each variant is a CRITICAL outcome with its own operator-facing text.

use thiserror::Error;

use crate::aws::types::{HealthQueryError, RegionResolutionError};

#[derive(Debug, Error)]
pub enum CheckError {
    /// Region not given and the metadata lookup failed.
    #[error("Cannot obtain this instance's Availability Zone. Maybe not running on AWS?")]
    RegionResolution(#[source] RegionResolutionError),

    /// The health query itself failed.
    #[error("An issue occurred while communicating with the AWS ELB API: {0}")]
    HealthQuery(#[from] HealthQueryError),

    /// The query succeeded but named no instances.
    #[error("Failed to retrieve ELB instance health data")]
    EmptyReport,
}

impl From<RegionResolutionError> for CheckError {
    fn from(err: RegionResolutionError) -> Self {
        CheckError::RegionResolution(err)
    }
}
