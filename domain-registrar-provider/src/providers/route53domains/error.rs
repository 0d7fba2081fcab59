//! Route 53 Domains 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53DomainsProvider;

/// Route 53 Domains 错误码映射
/// 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53DomainsProvider {
    fn provider_name(&self) -> &'static str {
        "route53domains"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredTokenException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限被拒绝 ============
            Some("AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 / 资源不存在 ============
            // 该 API 对未知域名和未知操作同样返回 InvalidInput，仅消息不同
            Some("InvalidInput" | "ValidationException") => {
                self.map_invalid_input(raw.message, context)
            }

            // ============ TLD 不支持 ============
            Some("UnsupportedTLD" | "TLDRulesViolation") => ProviderError::UnsupportedTld {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 重复请求 ============
            Some("DuplicateRequest") => ProviderError::DuplicateRequest {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 配额限制 ============
            Some("DomainLimitExceeded" | "OperationLimitExceeded") => {
                ProviderError::QuotaExceeded {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 频率限流（可重试） ============
            Some("ThrottlingException" | "Throttling" | "RequestLimitExceeded") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 服务端临时错误（可重试） ============
            Some("InternalFailure" | "ServiceUnavailable") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

impl Route53DomainsProvider {
    /// `InvalidInput` carries "not found" conditions as free text.
    fn map_invalid_input(&self, message: String, context: ErrorContext) -> ProviderError {
        let lower = message.to_lowercase();
        let not_found = lower.contains("not found") || lower.contains("not exist");

        if not_found {
            if let Some(operation_id) = context.operation_id {
                return ProviderError::OperationNotFound {
                    provider: self.provider_name().to_string(),
                    operation_id,
                    raw_message: Some(message),
                };
            }
            if let Some(domain) = context.domain {
                return ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain,
                    raw_message: Some(message),
                };
            }
        }

        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: "input".to_string(),
            detail: message,
        }
    }
}
