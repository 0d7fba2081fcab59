//! 业务逻辑服务层

mod domain_catalog_service;
mod domain_lifecycle_service;
mod registration_orchestrator;
mod zone_guard;

pub use domain_catalog_service::DomainCatalogService;
pub use domain_lifecycle_service::DomainLifecycleService;
pub use registration_orchestrator::RegistrationOrchestrator;
pub use zone_guard::{SkipReason, ZoneDeletion, ZoneGuard, REGISTRAR_ZONE_COMMENT};

use std::sync::Arc;

use domain_registrar_provider::{RegistryClient, ZoneClient};

use crate::config::OrchestratorConfig;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文，注入 registry 与 hosted-zone 客户端。
pub struct ServiceContext {
    /// 域名注册商客户端
    pub registry: Arc<dyn RegistryClient>,
    /// Hosted zone 客户端
    pub zones: Arc<dyn ZoneClient>,
    /// 编排配置
    pub config: OrchestratorConfig,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        registry: Arc<dyn RegistryClient>,
        zones: Arc<dyn ZoneClient>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            registry,
            zones,
            config,
        }
    }

    /// 基于当前上下文创建注册编排器
    #[must_use]
    pub fn orchestrator(&self) -> RegistrationOrchestrator {
        RegistrationOrchestrator::new(Arc::clone(&self.registry), self.config.clone())
    }

    /// 基于当前上下文创建 zone guard
    #[must_use]
    pub fn zone_guard(&self) -> ZoneGuard {
        ZoneGuard::new(Arc::clone(&self.zones))
    }
}
