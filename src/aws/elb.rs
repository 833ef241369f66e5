//! Classic ELB Query API client.
//!
//! # Responsibilities
//! - Build and sign the `DescribeInstanceHealth` request
//! - Bound the request with the configured API timeout
//! - Map the response document to a `HealthReport` or an error

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::aws::signing::{sign_post, SigningParams};
use crate::aws::types::{AwsCredentials, HealthQueryError, HealthQueryResult};
use crate::aws::xml::{parse_response, ElbResponse};
use crate::health::report::HealthReport;
use crate::health::source::{HealthQuery, HealthSource};

pub const API_VERSION: &str = "2012-06-01";
pub const SERVICE: &str = "elasticloadbalancing";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// HTTP client for the ELB API of one account.
#[derive(Debug, Clone)]
pub struct ElbClient {
    http: reqwest::Client,
    credentials: Option<AwsCredentials>,
    /// Replaces the regional endpoint when set.
    endpoint: Option<String>,
}

impl ElbClient {
    pub fn new(
        credentials: Option<AwsCredentials>,
        endpoint: Option<String>,
        timeout: Duration,
    ) -> HealthQueryResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("check-elb-health/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            credentials,
            endpoint,
        })
    }

    /// Endpoint URL for `region`, honoring the override.
    pub fn endpoint_for(&self, region: &str) -> HealthQueryResult<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.{}.amazonaws.com/", SERVICE, region),
        };
        let url = Url::parse(&raw).map_err(|_| HealthQueryError::InvalidEndpoint(raw.clone()))?;
        if url.host_str().is_none() {
            return Err(HealthQueryError::InvalidEndpoint(raw));
        }
        Ok(url)
    }
}

/// Form body for `DescribeInstanceHealth`.
pub fn describe_instance_health_body(load_balancer: &str, instances: Option<&[String]>) -> String {
    let mut form = url::form_urlencoded::Serializer::new(String::new());
    form.append_pair("Action", "DescribeInstanceHealth")
        .append_pair("Version", API_VERSION)
        .append_pair("LoadBalancerName", load_balancer);
    for (i, id) in instances.unwrap_or_default().iter().enumerate() {
        form.append_pair(&format!("Instances.member.{}.InstanceId", i + 1), id);
    }
    form.finish()
}

fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

impl HealthSource for ElbClient {
    async fn describe_instance_health(&self, query: &HealthQuery<'_>) -> HealthQueryResult<HealthReport> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(HealthQueryError::MissingCredentials)?;
        let url = self.endpoint_for(query.region)?;
        let body = describe_instance_health_body(query.load_balancer, query.instances);

        let signed = sign_post(
            &SigningParams {
                credentials,
                region: query.region,
                service: SERVICE,
                timestamp: Utc::now(),
            },
            &host_header(&url),
            url.path(),
            FORM_CONTENT_TYPE,
            &body,
        );

        tracing::debug!(endpoint = %url, load_balancer = %query.load_balancer, "Sending DescribeInstanceHealth");

        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("x-amz-date", &signed.amz_date)
            .header(AUTHORIZATION, &signed.authorization);
        if let Some(token) = &signed.security_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        match parse_response(&text) {
            Ok(ElbResponse::InstanceHealth(report)) if status.is_success() => Ok(report),
            Ok(ElbResponse::Error { code, message }) => {
                tracing::warn!(status = %status, code = %code, "ELB API error");
                Err(HealthQueryError::Api { code, message })
            }
            Ok(ElbResponse::InstanceHealth(_)) => Err(HealthQueryError::Status {
                status: status.as_u16(),
            }),
            Err(_) if !status.is_success() => Err(HealthQueryError::Status {
                status: status.as_u16(),
            }),
            Err(e) => Err(e),
        }
    }
}
