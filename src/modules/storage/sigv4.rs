//! Minimal AWS Signature v4 signing for the one raw S3 call we make
//! (`PUT ?policy`), which rust-s3 does not expose.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::core::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

/// Headers to attach to a signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub amz_date: String,
    pub payload_hash: String,
    pub authorization: String,
}

pub struct SigningRequest<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub canonical_uri: &'a str,
    pub canonical_query: &'a str,
    pub payload: &'a [u8],
}

pub struct Credentials<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Signing key chain: date → region → service → "aws4_request"
pub fn signing_key(secret_key: &str, date_stamp: &str, region: &str) -> Result<Vec<u8>, AppError> {
    let k_date = hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, b"s3")?;
    hmac_sha256(&k_service, b"aws4_request")
}

pub fn canonical_request(req: &SigningRequest<'_>, amz_date: &str, payload_hash: &str) -> String {
    let canonical_headers = format!(
        "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
        req.host, payload_hash, amz_date
    );
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        req.method,
        req.canonical_uri,
        req.canonical_query,
        canonical_headers,
        SIGNED_HEADERS,
        payload_hash
    )
}

pub fn sign(
    req: &SigningRequest<'_>,
    creds: &Credentials<'_>,
    now: DateTime<Utc>,
) -> Result<SignedHeaders, AppError> {
    let date_stamp = now.format("%Y%m%d").to_string();
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let payload_hash = hex::encode(Sha256::digest(req.payload));

    let canonical = canonical_request(req, &amz_date, &payload_hash);
    let credential_scope = format!("{}/{}/s3/aws4_request", date_stamp, creds.region);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        credential_scope,
        hex::encode(Sha256::digest(canonical.as_bytes()))
    );

    let key = signing_key(creds.secret_key, &date_stamp, creds.region)?;
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?);

    Ok(SignedHeaders {
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, creds.access_key, credential_scope, SIGNED_HEADERS, signature
        ),
        amz_date,
        payload_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(payload: &[u8]) -> SigningRequest<'_> {
        SigningRequest {
            method: "PUT",
            host: "localhost:9000",
            canonical_uri: "/media",
            canonical_query: "policy=",
            payload,
        }
    }

    #[test]
    fn test_canonical_request_layout() {
        let canonical = canonical_request(&request(b"{}"), "20250101T000000Z", "abc");
        let lines: Vec<&str> = canonical.lines().collect();
        assert_eq!(lines[0], "PUT");
        assert_eq!(lines[1], "/media");
        assert_eq!(lines[2], "policy=");
        assert_eq!(lines[3], "host:localhost:9000");
        assert_eq!(lines[4], "x-amz-content-sha256:abc");
        assert_eq!(lines[5], "x-amz-date:20250101T000000Z");
        assert_eq!(lines[7], SIGNED_HEADERS);
        assert_eq!(lines[8], "abc");
    }

    #[test]
    fn test_sign_is_deterministic_and_scoped() {
        let creds = Credentials {
            access_key: "minioadmin",
            secret_key: "minioadmin",
            region: "us-east-1",
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        let a = sign(&request(b"{}"), &creds, now).unwrap();
        let b = sign(&request(b"{}"), &creds, now).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.amz_date, "20250102T030405Z");
        assert!(a
            .authorization
            .starts_with("AWS4-HMAC-SHA256 Credential=minioadmin/20250102/us-east-1/s3/aws4_request"));
        // sha256("{}")
        assert_eq!(
            a.payload_hash,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );

        let other = sign(&request(b"[]"), &creds, now).unwrap();
        assert_ne!(a.authorization, other.authorization);
    }
}
