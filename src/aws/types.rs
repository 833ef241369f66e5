//! AWS-facing types and error definitions.

use std::fmt;
use thiserror::Error;

/// Static credentials used to sign ELB API requests.
///
/// Never logged: `Debug` redacts the secret parts.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
}

impl AwsCredentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Errors raised while asking the ELB API for instance health.
#[derive(Debug, Error)]
pub enum HealthQueryError {
    /// No access key / secret key pair was configured.
    #[error("no AWS credentials configured")]
    MissingCredentials,

    /// The API endpoint could not be built from the configuration.
    #[error("invalid ELB endpoint '{0}'")]
    InvalidEndpoint(String),

    /// Connection, TLS or timeout failure talking to the API.
    #[error("{}", describe_transport(.0))]
    Transport(#[from] reqwest::Error),

    /// The API answered with an `ErrorResponse` document.
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    /// Non-success status without a parseable error document.
    #[error("ELB API returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a valid `DescribeInstanceHealth` document.
    #[error("malformed ELB API response: {0}")]
    Parse(String),
}

/// Errors raised while resolving the region from the instance metadata service.
#[derive(Debug, Error)]
pub enum RegionResolutionError {
    #[error("metadata service did not answer within {0} seconds")]
    Timeout(u64),

    #[error("metadata request failed: {}", describe_transport(.0))]
    Transport(#[from] reqwest::Error),

    #[error("metadata service returned HTTP {0}")]
    Status(u16),

    #[error("unexpected availability zone '{0}'")]
    Malformed(String),
}

pub type HealthQueryResult<T> = Result<T, HealthQueryError>;

/// Failure kind followed by reqwest's message and its cause chain.
///
/// reqwest's own text only names the URL; the cause (timeout, refused
/// connection, TLS) lives in `source()`.
pub fn describe_transport(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_body() || err.is_decode() {
        "reading response failed"
    } else {
        "request failed"
    };

    let mut text = format!("{}: {}", kind, err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
