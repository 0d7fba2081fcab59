//! Route 53 Domains HTTP 请求方法（AWS JSON 1.1 协议）

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::ErrorResponse;
use super::{CONTENT_TYPE, Route53DomainsProvider, TARGET_PREFIX};

impl Route53DomainsProvider {
    /// Call one API action: `POST /` with the action in `X-Amz-Target`.
    pub(crate) async fn call<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        // 1. 序列化请求体
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        let host = self.host();
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let target = format!("{TARGET_PREFIX}.{action}");

        // 2. 参与签名的请求头
        let mut headers = vec![
            ("Host".to_string(), host.clone()),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
            ("X-Amz-Target".to_string(), target.clone()),
        ];
        if let Some(token) = &self.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }

        let authorization = self.sign("POST", "/", &[], &headers, &payload, &amz_date);
        let url = format!("https://{host}/");

        // 3. 构造请求
        let mut request = self.client.post(&url);
        for (name, value) in &headers {
            request = request.header(name, value);
        }
        let request = request.header("Authorization", authorization).body(payload);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            &format!("{url} (Target: {action})"),
            self.max_retries,
        )
        .await?;

        // 4. 错误响应
        if status >= 400 {
            return Err(self.response_error(status, &response_text, ctx));
        }

        // 部分操作返回空 body
        let text = if response_text.trim().is_empty() {
            "{}"
        } else {
            response_text.as_str()
        };
        HttpUtils::parse_json(text, self.provider_name())
    }

    /// Turn a non-2xx response into a [`ProviderError`].
    fn response_error(&self, status: u16, response_text: &str, ctx: ErrorContext) -> ProviderError {
        if let Ok(body) = serde_json::from_str::<ErrorResponse>(response_text)
            && let Some(code) = body.code()
        {
            let message = body.message.clone().unwrap_or_default();
            let err = self.map_error(RawApiError::with_code(code, message), ctx);
            if err.is_expected() {
                log::warn!("API error: {err}");
            } else {
                log::error!("API error (HTTP {status}): {err}");
            }
            return err;
        }

        // 非结构化错误
        if status >= 500 {
            ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: format!("HTTP {status}: {response_text}"),
            }
        } else {
            self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Route53DomainsProvider {
        Route53DomainsProvider::new("ak".into(), "sk".into())
    }

    #[test]
    fn structured_error_is_mapped() {
        let e = provider().response_error(
            400,
            r#"{"__type":"com.amazonaws.route53domains.v20140515#DuplicateRequest","message":"already submitted"}"#,
            ErrorContext::for_domain("example.com"),
        );
        assert!(
            matches!(&e, ProviderError::DuplicateRequest { raw_message: Some(m), .. } if m == "already submitted"),
            "{e:?}"
        );
    }

    #[test]
    fn unstructured_5xx_is_network_error() {
        let e = provider().response_error(500, "<html>oops</html>", ErrorContext::default());
        assert!(matches!(e, ProviderError::NetworkError { .. }));
    }

    #[test]
    fn unstructured_4xx_is_unknown() {
        let e = provider().response_error(403, "Forbidden", ErrorContext::default());
        assert!(matches!(
            &e,
            ProviderError::Unknown { raw_code: None, raw_message, .. } if raw_message.contains("403")
        ));
    }
}
