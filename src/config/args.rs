//! Command-line surface.
//!
//! Flags win over environment variables, which win over the settings file.
//! This is the only place the process environment is consulted.

use std::path::PathBuf;

use clap::Parser;

use crate::aws::types::AwsCredentials;
use crate::config::schema::{CheckConfig, ProbeSettings};

#[derive(Parser)]
#[command(name = "check-elb-health")]
#[command(version, about = "Checks the health of the instances behind an AWS Elastic Load Balancer", long_about = None)]
pub struct CliArgs {
    /// AWS access key
    #[arg(short = 'a', long, env = "AWS_ACCESS_KEY", hide_env_values = true)]
    pub aws_access_key: Option<String>,

    /// AWS secret access key
    #[arg(short = 'k', long, env = "AWS_SECRET_KEY", hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,

    /// AWS session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// AWS region (such as eu-west-1); detected from instance metadata when omitted
    #[arg(short = 'r', long, value_name = "REGION")]
    pub aws_region: Option<String>,

    /// Name of the Elastic Load Balancer to check
    #[arg(short = 'n', long)]
    pub elb_name: String,

    /// Comma separated list of instance ids to restrict the check to
    #[arg(short = 'i', long)]
    pub instances: Option<String>,

    /// List unhealthy instances instead of counting them
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// TOML settings file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// ELB API endpoint override
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl CliArgs {
    /// Merge flags and environment over `settings`.
    pub fn into_config(self, settings: &ProbeSettings) -> CheckConfig {
        let aws = &settings.aws;
        let pick = |flag: Option<String>, file: &Option<String>| {
            non_empty(flag).or_else(|| non_empty(file.clone()))
        };

        let access_key = pick(self.aws_access_key, &aws.access_key);
        let secret_key = pick(self.aws_secret_access_key, &aws.secret_key);
        let session_token = pick(self.aws_session_token, &aws.session_token);

        // A half-configured pair is kept so validation can reject it.
        let credentials = match (access_key, secret_key) {
            (None, None) => None,
            (access_key, secret_key) => Some(AwsCredentials {
                access_key: access_key.unwrap_or_default(),
                secret_key: secret_key.unwrap_or_default(),
                session_token,
            }),
        };

        CheckConfig {
            elb_name: self.elb_name,
            region: pick(self.aws_region, &aws.region),
            instances: self.instances.as_deref().and_then(parse_instances),
            verbose: self.verbose,
            credentials,
            endpoint: pick(self.endpoint, &aws.endpoint),
            metadata_url: settings.metadata.url.clone(),
            metadata_timeout_secs: settings.metadata.timeout_secs,
            api_timeout_secs: settings.api.timeout_secs,
        }
    }
}

/// Split a comma separated id list; `None` when nothing is left.
pub fn parse_instances(raw: &str) -> Option<Vec<String>> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
