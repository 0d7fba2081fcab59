//! Configuration types
//!
//! Everything here is plain `serde` data with defaults, so a host can load it
//! from JSON (or any other serde format) and hand it to the services.

use serde::{Deserialize, Serialize};

use domain_registrar_provider::{ProviderCredentials, RegistrationRequest};

use crate::error::{CoreError, CoreResult};

/// Default seconds between two status polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

/// How the wait between two polls evolves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PollStrategy {
    /// Always wait `poll_interval_secs`.
    #[default]
    Fixed,
    /// Start at `poll_interval_secs`, multiply after each poll, cap at `max_interval_secs`.
    Exponential {
        max_interval_secs: u64,
        multiplier: f64,
    },
}

/// Settings of the registration orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub strategy: PollStrategy,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            strategy: PollStrategy::Fixed,
        }
    }
}

/// Desired state of one managed domain: the registration request plus the
/// teardown switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDomain {
    #[serde(flatten)]
    pub request: RegistrationRequest,
    /// Actually delete the registration on teardown. When false the domain is
    /// only forgotten.
    #[serde(default)]
    pub allow_delete: bool,
    /// Remove the registrar-created hosted zone right after registration.
    #[serde(default)]
    pub delete_hosted_zone: bool,
}

impl ManagedDomain {
    pub fn new(request: RegistrationRequest) -> Self {
        Self {
            request,
            allow_delete: false,
            delete_hosted_zone: false,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.request.domain_name
    }

    /// Check the request before anything is sent to the registry.
    pub fn validate(&self) -> CoreResult<()> {
        self.request
            .validate("config")
            .map_err(|e| CoreError::ValidationError(e.to_string()))
    }
}

/// Top-level configuration: registry credentials plus orchestrator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarConfig {
    pub credentials: ProviderCredentials,
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

impl RegistrarConfig {
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}
