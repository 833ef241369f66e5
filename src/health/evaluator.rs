//! Health aggregation and severity decision.

use crate::aws::types::HealthQueryResult;
use crate::error::CheckError;
use crate::health::report::{HealthReport, UnhealthyMembers};
use crate::health::source::{HealthQuery, HealthSource};
use crate::health::verdict::Verdict;

/// Evaluates one load balancer in an already-resolved region.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    pub load_balancer: &'a str,
    pub region: &'a str,
    pub instances: Option<&'a [String]>,
    pub verbose: bool,
}

impl<'a> Evaluator<'a> {
    /// Query `source` once and turn the answer into a verdict.
    pub async fn evaluate<S: HealthSource>(&self, source: &S) -> Verdict {
        let query = HealthQuery {
            region: self.region,
            load_balancer: self.load_balancer,
            instances: self.instances.filter(|ids| !ids.is_empty()),
        };

        tracing::debug!(
            load_balancer = %self.load_balancer,
            region = %self.region,
            filtered = query.instances.map(<[String]>::len).unwrap_or(0),
            "Querying instance health"
        );

        let result = source.describe_instance_health(&query).await;
        self.classify(result)
    }

    /// Pure decision over the collaborator's answer.
    pub fn classify(&self, result: HealthQueryResult<HealthReport>) -> Verdict {
        let report = match result {
            Ok(report) if report.is_empty() => return self.failed(CheckError::EmptyReport),
            Ok(report) => report,
            Err(e) => return self.failed(CheckError::HealthQuery(e)),
        };

        let unhealthy = UnhealthyMembers::from_report(&report);
        tracing::info!(
            load_balancer = %self.load_balancer,
            instances = report.len(),
            unhealthy = unhealthy.len(),
            "Instance health evaluated"
        );

        if unhealthy.is_empty() {
            Verdict::ok(format!(
                "All instances on ELB {}::{} healthy!",
                self.region, self.load_balancer
            ))
        } else if self.verbose {
            Verdict::critical(format!(
                "Unhealthy instances detected: {}",
                unhealthy.describe()
            ))
        } else {
            Verdict::critical(format!(
                "Detected [{}] unhealthy instances",
                unhealthy.len()
            ))
        }
    }

    fn failed(&self, err: CheckError) -> Verdict {
        tracing::warn!(load_balancer = %self.load_balancer, error = %err, "Health check failed");
        Verdict::critical(err.to_string())
    }
}
