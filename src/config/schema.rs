//! Configuration schema definitions.
//!
//! `ProbeSettings` is the optional settings file; every field has a default so
//! an empty file is valid. `CheckConfig` is what one run actually uses, after
//! command-line flags and environment have been merged in.

use std::fmt;

use serde::Deserialize;

use crate::aws::metadata::DEFAULT_METADATA_URL;
use crate::aws::types::AwsCredentials;

/// Root of the TOML settings file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProbeSettings {
    /// Account, region and endpoint defaults.
    pub aws: AwsSettings,

    /// Instance metadata lookup.
    pub metadata: MetadataSettings,

    /// ELB API request settings.
    pub api: ApiSettings,

    /// Logging settings.
    pub observability: ObservabilitySettings,
}

/// `[aws]` section.
#[derive(Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub session_token: Option<String>,

    /// Overrides `https://elasticloadbalancing.<region>.amazonaws.com/`.
    pub endpoint: Option<String>,
}

impl fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("AwsSettings")
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &redact(&self.secret_key))
            .field("session_token", &redact(&self.session_token))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// `[metadata]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetadataSettings {
    /// Availability zone document URL.
    pub url: String,

    /// Upper bound for the whole lookup, in seconds.
    pub timeout_secs: u64,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_METADATA_URL.to_string(),
            timeout_secs: 3,
        }
    }
}

/// `[api]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    /// Request timeout for `DescribeInstanceHealth`, in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// `[observability]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    pub log_level: String,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Everything a single check run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Load balancer to check.
    pub elb_name: String,

    /// Explicit region; `None` means look it up.
    pub region: Option<String>,

    /// Restrict the query to these instance ids.
    pub instances: Option<Vec<String>>,

    /// List unhealthy instances instead of counting them.
    pub verbose: bool,

    pub credentials: Option<AwsCredentials>,
    pub endpoint: Option<String>,
    pub metadata_url: String,
    pub metadata_timeout_secs: u64,
    pub api_timeout_secs: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        let metadata = MetadataSettings::default();
        Self {
            elb_name: String::new(),
            region: None,
            instances: None,
            verbose: false,
            credentials: None,
            endpoint: None,
            metadata_url: metadata.url,
            metadata_timeout_secs: metadata.timeout_secs,
            api_timeout_secs: ApiSettings::default().timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_file_uses_defaults() {
        let settings: ProbeSettings = toml::from_str("").unwrap();
        assert_eq!(settings, ProbeSettings::default());
        assert_eq!(settings.metadata.timeout_secs, 3);
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.observability.log_level, "warn");
    }

    #[test]
    fn test_partial_settings_file() {
        let settings: ProbeSettings = toml::from_str(
            r#"
            [aws]
            region = "eu-west-1"
            secret_key = "shh"

            [metadata]
            timeout_secs = 1
            "#,
        )
        .unwrap();
        assert_eq!(settings.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(settings.metadata.timeout_secs, 1);
        assert_eq!(settings.metadata.url, DEFAULT_METADATA_URL);
        assert!(!format!("{:?}", settings).contains("shh"));
    }
}
