//! Managed domain type definitions

use serde::Serialize;

use domain_registrar_provider::{DomainRecord, OperationHandle};

use crate::services::ZoneDeletion;

/// A registered domain together with its hosted zone, if one was found
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedDomain {
    /// Registry view of the domain
    pub record: DomainRecord,
    /// Bare id of the hosted zone the registry created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

impl ProvisionedDomain {
    pub fn domain_name(&self) -> &str {
        &self.record.domain_name
    }
}

/// Outcome of tearing down a managed domain
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DomainDeletion {
    /// Deletion is not allowed; the registration stays in place untouched.
    Forgotten,
    /// The registry accepted the deletion request.
    Deleted {
        operation: OperationHandle,
        zone: ZoneDeletion,
    },
}
