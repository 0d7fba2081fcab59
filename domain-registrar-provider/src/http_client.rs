//! Generic HTTP client tools
//!
//! Shared request execution for registry clients: sending, logging, transient
//! status classification and retry with exponential backoff. Each client keeps
//! full control over signing and builds its own `RequestBuilder`.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-provided `Retry-After` wait.
const MAX_RETRY_AFTER_SECS: u64 = 30;
/// Upper bound for a computed backoff delay.
const MAX_BACKOFF_MS: u64 = 10_000;
/// First backoff delay.
const BASE_BACKOFF_MS: u64 = 100;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send one request and return `(status_code, body)`.
    ///
    /// HTTP 429 becomes [`ProviderError::RateLimited`] and 502/503/504 become
    /// [`ProviderError::NetworkError`] so the retry loop can pick them up.
    /// Every other status is returned to the caller for API-specific parsing.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] POST {action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] {action} -> HTTP {status_code}");

        // Read before the body is consumed
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 || matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            return Err(transient_status_error(
                status_code,
                body,
                retry_after,
                provider_name,
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] {action} response: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON body, logging a truncated copy on failure.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!(
                "[{provider_name}] JSON parse failed: {e}; raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with up to `max_retries` retries.
    ///
    /// Only transient failures ([`ProviderError::is_retryable`]) are retried.
    /// Registry business errors (invalid input, duplicate request, unknown
    /// domain) are returned on the first attempt, so a rejected registration
    /// is never resubmitted.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        action: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, provider_name, action).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone {action} request, disabling retry");
                return Self::execute_request(request_builder, provider_name, action).await;
            };

            match Self::execute_request(req, provider_name, action).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        action,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Map a throttling or gateway status to the matching transient error.
fn transient_status_error(
    status_code: u16,
    body: String,
    retry_after: Option<u64>,
    provider_name: &str,
) -> ProviderError {
    if status_code == 429 {
        log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
        ProviderError::RateLimited {
            provider: provider_name.to_string(),
            retry_after,
            raw_message: Some(body),
        }
    } else {
        log::warn!("[{provider_name}] Gateway error (HTTP {status_code})");
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("HTTP {status_code}: {body}"),
        }
    }
}

/// Delay before the next attempt: the server's `Retry-After` when rate
/// limited (capped), exponential backoff otherwise.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = BASE_BACKOFF_MS.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}
