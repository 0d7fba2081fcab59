//! 域名注册编排
//!
//! Submit, poll until terminal, optionally set nameservers, then read the
//! registered domain back. One call drives one request; nothing is retried
//! once a step has completed.

use std::sync::Arc;

use domain_registrar_provider::{
    DomainRecord, OperationDetail, OperationHandle, ProviderError, RegistrationRequest,
    RegistryClient,
};

use crate::config::OrchestratorConfig;
use crate::error::{RegistrationError, RegistrationStep};
use crate::polling::{poll_until, PollOutcome, Probe};

/// Drives a single registration to completion.
pub struct RegistrationOrchestrator {
    registry: Arc<dyn RegistryClient>,
    config: OrchestratorConfig,
}

impl RegistrationOrchestrator {
    #[must_use]
    pub fn new(registry: Arc<dyn RegistryClient>, config: OrchestratorConfig) -> Self {
        Self { registry, config }
    }

    /// Register `request.domain_name` and return the registry's view of it.
    ///
    /// The request is assumed valid. On timeout the remote operation keeps
    /// running; callers may look it up later through the returned handle.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<DomainRecord, RegistrationError> {
        let domain = request.domain_name.as_str();

        // Submitting
        let operation = self
            .registry
            .register_domain(request)
            .await
            .map_err(|source| RegistrationError::Submit {
                domain: domain.to_string(),
                source,
            })?;
        log::info!("[{domain}] Registration submitted, operation {operation}");

        // Polling
        self.wait_for_operation(domain, &operation, request).await?;
        log::info!("[{domain}] Registration operation {operation} succeeded");

        // Configuring
        if !request.nameservers.is_empty() {
            let ns_operation = self
                .registry
                .update_nameservers(domain, &request.nameservers)
                .await
                .map_err(|source| {
                    log::error!("[{domain}] Registered but nameserver update failed: {source}");
                    RegistrationError::NameserverUpdate {
                        domain: domain.to_string(),
                        source,
                    }
                })?;
            log::info!(
                "[{domain}] Nameservers set to {:?}, operation {ns_operation}",
                request.nameservers
            );
        }

        // Finalizing
        self.registry
            .get_domain_detail(domain)
            .await
            .map_err(|source| RegistrationError::Read {
                domain: domain.to_string(),
                step: RegistrationStep::Finalizing,
                source,
            })
    }

    async fn wait_for_operation(
        &self,
        domain: &str,
        operation: &OperationHandle,
        request: &RegistrationRequest,
    ) -> Result<OperationDetail, RegistrationError> {
        let registry = &self.registry;

        let outcome = poll_until(&self.config, request.timeout(), || async move {
            let detail = registry.get_operation_detail(operation).await?;
            log::debug!("[{domain}] Operation {operation} status: {}", detail.status);
            Ok::<_, ProviderError>(if detail.status.is_terminal() {
                Probe::Ready(detail)
            } else {
                Probe::Pending(detail)
            })
        })
        .await
        .map_err(|source| RegistrationError::Read {
            domain: domain.to_string(),
            step: RegistrationStep::Polling,
            source,
        })?;

        match outcome {
            PollOutcome::Ready(detail) if detail.status.is_failure() => {
                log::warn!(
                    "[{domain}] Registration operation {operation} ended with {}",
                    detail.status
                );
                Err(RegistrationError::Rejected {
                    domain: domain.to_string(),
                    operation: operation.clone(),
                    status: detail.status,
                    message: detail.message,
                })
            }
            PollOutcome::Ready(detail) => Ok(detail),
            PollOutcome::TimedOut { last, attempts } => {
                log::warn!(
                    "[{domain}] Registration operation {operation} still {} after {attempts} polls",
                    last.status
                );
                Err(RegistrationError::Timeout {
                    domain: domain.to_string(),
                    operation: operation.clone(),
                    timeout_secs: request.registration_timeout_secs,
                    last_status: last.status,
                    last_message: last.message,
                })
            }
        }
    }
}
