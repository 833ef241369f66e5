//! AWS Signature Version 4 for form-encoded Query API requests.
//!
//! Only what a single `POST /` with a form body needs: no query string,
//! no chunked payloads, no presigning.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::aws::types::AwsCredentials;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

type HmacSha256 = Hmac<Sha256>;

/// Everything that goes into one request signature.
#[derive(Debug, Clone)]
pub struct SigningParams<'a> {
    pub credentials: &'a AwsCredentials,
    pub region: &'a str,
    pub service: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// Headers to attach to the outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub authorization: String,
    pub amz_date: String,
    pub security_token: Option<String>,
}

/// Sign a `POST` request carrying `body` with the given `content_type`.
///
/// `host` must be exactly what the HTTP client sends in the `Host` header
/// (including a non-default port).
pub fn sign_post(
    params: &SigningParams<'_>,
    host: &str,
    path: &str,
    content_type: &str,
    body: &str,
) -> SignedHeaders {
    let amz_date = params.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date_stamp = params.timestamp.format("%Y%m%d").to_string();
    let token = params.credentials.session_token.as_deref();

    let mut canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-amz-date:{}\n",
        content_type.trim(),
        host.trim(),
        amz_date
    );
    let mut signed_headers = String::from("content-type;host;x-amz-date");
    if let Some(token) = token {
        canonical_headers.push_str(&format!("x-amz-security-token:{}\n", token.trim()));
        signed_headers.push_str(";x-amz-security-token");
    }

    let canonical_path = if path.is_empty() { "/" } else { path };
    let canonical_request = format!(
        "POST\n{}\n\n{}\n{}\n{}",
        canonical_path,
        canonical_headers,
        signed_headers,
        sha256_hex(body.as_bytes())
    );

    let scope = format!(
        "{}/{}/{}/aws4_request",
        date_stamp, params.region, params.service
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(canonical_request.as_bytes())
    );

    let key = signing_key(
        &params.credentials.secret_key,
        &date_stamp,
        params.region,
        params.service,
    );
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    SignedHeaders {
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, params.credentials.access_key, scope, signed_headers, signature
        ),
        amz_date,
        security_token: token.map(str::to_string),
    }
}

/// Derive the per-day, per-region, per-service signing key.
pub fn signing_key(secret_key: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
