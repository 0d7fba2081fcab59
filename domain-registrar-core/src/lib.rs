//! Domain Registrar Core Library
//!
//! Provides the business logic on top of the registry and hosted-zone
//! clients, including:
//! - Registration orchestration (submit, poll, configure, finalize)
//! - Hosted zone safe-delete (Zone Guard)
//! - Managed domain lifecycle (create / read / update / renew / delete)
//! - Availability and price lookups (Catalog Service)
//!
//! Remote systems are reached only through the `RegistryClient` and
//! `ZoneClient` traits, so hosts and tests can inject their own clients.

pub mod config;
pub mod error;
pub mod polling;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ManagedDomain, OrchestratorConfig, PollStrategy, RegistrarConfig};
pub use error::{CoreError, CoreResult, RegistrationError, RegistrationStep};
pub use services::{
    DomainCatalogService, DomainLifecycleService, RegistrationOrchestrator, ServiceContext,
    SkipReason, ZoneDeletion, ZoneGuard,
};
