//! AWS Signature Version 4

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{Route53DomainsProvider, SERVICE_NAME};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Credential scope of one signature.
pub(crate) struct SigningScope<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

impl Route53DomainsProvider {
    /// Generate the SigV4 `Authorization` header value.
    /// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
    ///
    /// `amz_date` is the `X-Amz-Date` value (`%Y%m%dT%H%M%SZ`). `headers` must
    /// contain every header that is signed, including `Host` and `X-Amz-Date`.
    pub(crate) fn sign(
        &self,
        method: &str,
        uri: &str,
        query: &[(&str, &str)],
        headers: &[(String, String)],
        payload: &str,
        amz_date: &str,
    ) -> String {
        let scope = SigningScope {
            access_key_id: &self.access_key_id,
            secret_access_key: &self.secret_access_key,
            region: &self.region,
            service: SERVICE_NAME,
        };
        authorization(&scope, method, uri, query, headers, payload, amz_date)
    }
}

pub(crate) fn authorization(
    scope: &SigningScope<'_>,
    method: &str,
    uri: &str,
    query: &[(&str, &str)],
    headers: &[(String, String)],
    payload: &str,
    amz_date: &str,
) -> String {
    let (canonical, signed_headers) = canonical_request(method, uri, query, headers, payload);
    log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical));

    let date = amz_date.get(..8).unwrap_or(amz_date);
    let credential_scope = format!(
        "{date}/{}/{}/aws4_request",
        scope.region, scope.service
    );
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{credential_scope}\n{}",
        sha256_hex(canonical.as_bytes())
    );
    log::debug!("StringToSign:\n{string_to_sign}");

    let signing_key = derive_signing_key(
        scope.secret_access_key,
        date,
        scope.region,
        scope.service,
    );
    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

    format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        scope.access_key_id
    )
}

/// Build the canonical request and the `SignedHeaders` list.
fn canonical_request(
    method: &str,
    uri: &str,
    query: &[(&str, &str)],
    headers: &[(String, String)],
    payload: &str,
) -> (String, String) {
    let canonical_uri = if uri.is_empty() { "/" } else { uri };

    // 参数名与参数值均 URI 编码后按字典序排序
    let mut params: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| {
            (
                urlencoding::encode(k).into_owned(),
                urlencoding::encode(v).into_owned(),
            )
        })
        .collect();
    params.sort();
    let canonical_query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut sorted_headers: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), collapse_whitespace(v)))
        .collect();
    sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = sorted_headers
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });
    let signed_headers = sorted_headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let canonical = format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{}",
        sha256_hex(payload.as_bytes())
    );
    (canonical, signed_headers)
}

/// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
fn derive_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Trim and collapse runs of spaces, as SigV4 requires for header values.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
