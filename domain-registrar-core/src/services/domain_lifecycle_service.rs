//! 托管域名生命周期服务
//!
//! Create, read, update, renew and delete one managed domain. Registration
//! goes through the orchestrator; the hosted zone is handled best-effort and
//! never fails the surrounding call.

use std::sync::Arc;

use domain_registrar_provider::{DomainRecord, OperationHandle, ProviderError};

use crate::config::ManagedDomain;
use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ZoneDeletion};
use crate::types::{DomainDeletion, ProvisionedDomain};

/// 域名生命周期服务
pub struct DomainLifecycleService {
    ctx: Arc<ServiceContext>,
}

impl DomainLifecycleService {
    /// 创建生命周期服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 注册域名，并按配置处理 registry 自动创建的 hosted zone
    pub async fn create(&self, desired: &ManagedDomain) -> CoreResult<ProvisionedDomain> {
        desired.validate()?;
        let domain = desired.domain_name();

        let record = self.ctx.orchestrator().register(&desired.request).await?;

        let hosted_zone_id = if desired.delete_hosted_zone {
            match self.ctx.zone_guard().safe_delete(domain).await {
                ZoneDeletion::Deleted { .. } => None,
                // 未删除时仍记录 zone id
                ZoneDeletion::Skipped(_) => self.find_zone_id(domain).await,
            }
        } else {
            self.find_zone_id(domain).await
        };

        Ok(ProvisionedDomain {
            record,
            hosted_zone_id,
        })
    }

    /// 读取域名当前状态
    ///
    /// Returns `Ok(None)` only when the registry reports the domain as
    /// unknown; any other failure is an error.
    pub async fn read(&self, domain: &str) -> CoreResult<Option<ProvisionedDomain>> {
        let record = match self.ctx.registry.get_domain_detail(domain).await {
            Ok(record) => record,
            Err(ProviderError::DomainNotFound { .. }) => {
                log::warn!("[{domain}] Domain no longer registered");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let hosted_zone_id = self.find_zone_id(domain).await;
        Ok(Some(ProvisionedDomain {
            record,
            hosted_zone_id,
        }))
    }

    /// 将域名配置同步为期望状态
    ///
    /// Auto-renew is only toggled when it differs from `current_auto_renew`;
    /// contacts and privacy are always pushed.
    pub async fn update(
        &self,
        desired: &ManagedDomain,
        current_auto_renew: bool,
    ) -> CoreResult<DomainRecord> {
        desired.validate()?;
        let domain = desired.domain_name();
        let request = &desired.request;
        let registry = &self.ctx.registry;

        if request.auto_renew != current_auto_renew {
            if request.auto_renew {
                registry.enable_auto_renew(domain).await?;
            } else {
                registry.disable_auto_renew(domain).await?;
            }
            log::info!("[{domain}] Auto-renew set to {}", request.auto_renew);
        }

        if !request.nameservers.is_empty() {
            let operation = registry
                .update_nameservers(domain, &request.nameservers)
                .await?;
            log::info!("[{domain}] Nameserver update submitted, operation {operation}");
        }

        let operation = registry.update_contacts(domain, &request.contacts).await?;
        log::info!("[{domain}] Contact update submitted, operation {operation}");

        let operation = registry
            .update_contact_privacy(domain, &request.privacy)
            .await?;
        log::info!("[{domain}] Privacy update submitted, operation {operation}");

        Ok(registry.get_domain_detail(domain).await?)
    }

    /// 续费域名
    pub async fn renew(&self, domain: &str, duration_years: u8) -> CoreResult<OperationHandle> {
        let record = match self.ctx.registry.get_domain_detail(domain).await {
            Ok(record) => record,
            Err(ProviderError::DomainNotFound { .. }) => {
                return Err(CoreError::DomainNotFound(domain.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let current_year = record
            .expiration_year()
            .ok_or_else(|| CoreError::MissingExpirationDate(domain.to_string()))?;

        let operation = self
            .ctx
            .registry
            .renew_domain(domain, duration_years, current_year)
            .await?;
        log::info!(
            "[{domain}] Renewal for {duration_years} year(s) from {current_year} submitted, operation {operation}"
        );
        Ok(operation)
    }

    /// 删除托管域名
    ///
    /// Without `allow_delete` the registration is left in place and only
    /// dropped from management.
    pub async fn delete(&self, desired: &ManagedDomain) -> CoreResult<DomainDeletion> {
        let domain = desired.domain_name();

        if !desired.allow_delete {
            log::warn!(
                "[{domain}] Domain deletion not allowed; the registration remains active and is no longer managed"
            );
            return Ok(DomainDeletion::Forgotten);
        }

        let operation = self.ctx.registry.delete_domain(domain).await?;
        log::info!("[{domain}] Domain deletion submitted, operation {operation}");

        let zone = self.ctx.zone_guard().safe_delete(domain).await;
        Ok(DomainDeletion::Deleted { operation, zone })
    }

    /// 查找 hosted zone id，失败时仅记录日志
    async fn find_zone_id(&self, domain: &str) -> Option<String> {
        match self.ctx.zone_guard().locate_zone_id(domain).await {
            Ok(id) => id,
            Err(e) => {
                log::warn!("[{domain}] Failed to look up hosted zone: {e}");
                None
            }
        }
    }
}
