//! 域名目录服务（可用性与价格查询）

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;

use domain_registrar_provider::{normalize_domain_name, DomainPrice};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::AvailabilityReport;

/// 域名目录服务
pub struct DomainCatalogService {
    ctx: Arc<ServiceContext>,
}

impl DomainCatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 查询单个域名是否可注册
    pub async fn check_availability(&self, domain: &str) -> CoreResult<AvailabilityReport> {
        let availability = self.ctx.registry.check_availability(domain).await?;
        log::debug!("[{domain}] Availability: {availability:?}");
        Ok(AvailabilityReport::new(domain, availability))
    }

    /// 并发查询多个域名，结果顺序与输入一致
    pub async fn check_availability_batch(
        &self,
        domains: &[String],
    ) -> Vec<(String, CoreResult<AvailabilityReport>)> {
        let results = join_all(domains.iter().map(|d| self.check_availability(d))).await;
        domains.iter().cloned().zip(results).collect()
    }

    /// 查询 TLD 价格
    ///
    /// `tld` may carry a leading dot. Pages are walked until the TLD shows up.
    pub async fn get_price(&self, tld: &str) -> CoreResult<DomainPrice> {
        let wanted = normalize_domain_name(tld.trim_start_matches('.'));
        if wanted.is_empty() {
            return Err(CoreError::ValidationError("TLD must not be empty".to_string()));
        }

        let mut marker: Option<String> = None;
        let mut seen_markers = HashSet::new();
        loop {
            let page = self
                .ctx
                .registry
                .list_prices(Some(&wanted), marker.as_deref())
                .await?;

            if let Some(price) = page
                .prices
                .into_iter()
                .find(|p| p.tld.eq_ignore_ascii_case(&wanted))
            {
                return Ok(price);
            }

            match page.next_marker {
                // 重复的 marker 视为列表结束
                Some(next) if seen_markers.insert(next.clone()) => marker = Some(next),
                _ => break,
            }
        }

        log::warn!("No pricing information found for TLD: {wanted}");
        Err(CoreError::TldNotFound(wanted))
    }
}
