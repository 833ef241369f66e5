//! EC2 instance metadata lookup.

use std::time::Duration;

use tokio::time::timeout;

use crate::aws::types::RegionResolutionError;
use crate::probe::region::ZoneSource;

pub const DEFAULT_METADATA_URL: &str =
    "http://169.254.169.254/latest/meta-data/placement/availability-zone/";

/// Reads the availability zone of the instance the check runs on.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl MetadataClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    async fn fetch(&self) -> Result<String, RegionResolutionError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegionResolutionError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl ZoneSource for MetadataClient {
    async fn availability_zone(&self) -> Result<String, RegionResolutionError> {
        // One bound over connect, headers and body.
        match timeout(self.timeout, self.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(RegionResolutionError::Timeout(self.timeout.as_secs())),
        }
    }
}
