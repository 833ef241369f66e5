//! The health-reporting seam between the evaluator and the ELB API.

use std::future::Future;

use crate::aws::types::HealthQueryResult;
use crate::health::report::HealthReport;

/// One `DescribeInstanceHealth` request.
#[derive(Debug, Clone, Copy)]
pub struct HealthQuery<'a> {
    pub region: &'a str,
    pub load_balancer: &'a str,
    /// `None` asks for every registered instance.
    pub instances: Option<&'a [String]>,
}

/// Anything that can report instance health for a load balancer.
pub trait HealthSource {
    fn describe_instance_health(
        &self,
        query: &HealthQuery<'_>,
    ) -> impl Future<Output = HealthQueryResult<HealthReport>> + Send;
}
