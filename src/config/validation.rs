//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckConfig → Result<(), Vec<ValidationError>>
//! - Runs once, before any network call

use thiserror::Error;
use url::Url;

use crate::config::schema::CheckConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ELB name must not be empty")]
    EmptyElbName,

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("invalid {field} URL '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("AWS access key and secret key must be given together")]
    PartialCredentials,
}

/// Check a merged configuration.
pub fn validate_config(config: &CheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.elb_name.trim().is_empty() {
        errors.push(ValidationError::EmptyElbName);
    }
    if config.metadata_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("metadata.timeout_secs"));
    }
    if config.api_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.timeout_secs"));
    }
    if !is_http_url(&config.metadata_url) {
        errors.push(ValidationError::InvalidUrl {
            field: "metadata",
            value: config.metadata_url.clone(),
        });
    }
    if let Some(endpoint) = config.endpoint.as_deref() {
        if !is_http_url(endpoint) {
            errors.push(ValidationError::InvalidUrl {
                field: "endpoint",
                value: endpoint.to_string(),
            });
        }
    }
    if let Some(creds) = &config.credentials {
        if creds.access_key.is_empty() || creds.secret_key.is_empty() {
            errors.push(ValidationError::PartialCredentials);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
