use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    ContactPrivacy, DomainAvailability, DomainContacts, DomainRecord, HostedZone,
    OperationDetail, OperationHandle, PricePage, RegistrationRequest, ZoneRecord,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（用于 `DomainNotFound`、`UnsupportedTld` 等错误）
    pub domain: Option<String>,
    /// 异步操作 ID（用于 `OperationNotFound`）
    pub operation_id: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            ..Default::default()
        }
    }

    pub fn for_operation(handle: &OperationHandle) -> Self {
        Self {
            operation_id: Some(handle.as_str().to_string()),
            ..Default::default()
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Domain registry capability.
///
/// The orchestration engine depends on this trait only, so deterministic
/// test doubles can stand in for a real registry. Long-running actions return
/// an [`OperationHandle`] to be polled with
/// [`get_operation_detail`](Self::get_operation_detail).
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Submit a registration. Returns immediately with the operation to poll.
    async fn register_domain(&self, request: &RegistrationRequest) -> Result<OperationHandle>;

    /// Fetch the current status of an asynchronous operation.
    async fn get_operation_detail(&self, handle: &OperationHandle) -> Result<OperationDetail>;

    /// Replace the delegated nameservers of a domain.
    async fn update_nameservers(
        &self,
        domain_name: &str,
        nameservers: &[String],
    ) -> Result<OperationHandle>;

    /// Read the registry's current view of a domain.
    async fn get_domain_detail(&self, domain_name: &str) -> Result<DomainRecord>;

    /// Extend a registration. `current_expiry_year` guards against double renewals.
    async fn renew_domain(
        &self,
        domain_name: &str,
        duration_years: u8,
        current_expiry_year: i32,
    ) -> Result<OperationHandle>;

    async fn enable_auto_renew(&self, domain_name: &str) -> Result<()>;

    async fn disable_auto_renew(&self, domain_name: &str) -> Result<()>;

    /// Replace the admin, registrant and tech contacts.
    async fn update_contacts(
        &self,
        domain_name: &str,
        contacts: &DomainContacts,
    ) -> Result<OperationHandle>;

    /// Change WHOIS privacy protection per contact.
    async fn update_contact_privacy(
        &self,
        domain_name: &str,
        privacy: &ContactPrivacy,
    ) -> Result<OperationHandle>;

    /// Request deletion of a registration. Not every TLD supports it.
    async fn delete_domain(&self, domain_name: &str) -> Result<OperationHandle>;

    async fn check_availability(&self, domain_name: &str) -> Result<DomainAvailability>;

    /// List TLD prices, one page at a time. `tld = None` lists every TLD.
    async fn list_prices(&self, tld: Option<&str>, marker: Option<&str>) -> Result<PricePage>;
}

/// Hosted-zone capability of the DNS subsystem.
///
/// Only the three calls the zone guard needs; zone contents are never modified.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// List zones in name order starting at `dns_name` (trailing-dot form).
    ///
    /// Implementations may return zones that merely share the prefix; callers
    /// must filter for an exact match.
    async fn list_zones_by_name(&self, dns_name: &str) -> Result<Vec<HostedZone>>;

    /// List every record set of a zone.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<ZoneRecord>>;

    async fn delete_zone(&self, zone_id: &str) -> Result<()>;
}
