//! One end-to-end check run.

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::health::{Evaluator, HealthSource, Verdict};
use crate::probe::region::{resolve_region, ZoneSource};

/// Runs the check described by a validated [`CheckConfig`].
#[derive(Debug, Clone, Copy)]
pub struct HealthCheck<'a> {
    config: &'a CheckConfig,
}

impl<'a> HealthCheck<'a> {
    pub fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    /// Resolve the region, then evaluate the load balancer.
    ///
    /// A region resolution failure ends the run before `health` is queried.
    pub async fn run<Z, S>(&self, zones: &Z, health: &S) -> Verdict
    where
        Z: ZoneSource,
        S: HealthSource,
    {
        let region = match resolve_region(self.config.region.as_deref(), zones).await {
            Ok(region) => region,
            Err(e) => {
                tracing::error!(error = %e, "Region resolution failed");
                return Verdict::critical(CheckError::from(e).to_string());
            }
        };

        Evaluator {
            load_balancer: &self.config.elb_name,
            region: &region,
            instances: self.config.instances.as_deref(),
            verbose: self.config.verbose,
        }
        .evaluate(health)
        .await
    }
}
