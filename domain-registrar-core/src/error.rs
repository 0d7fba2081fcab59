//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use domain_registrar_provider::{OperationHandle, OperationStatus};

// Re-export library error type
pub use domain_registrar_provider::ProviderError;

/// Phase of the registration sequence in which a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    Submitting,
    Polling,
    Configuring,
    Finalizing,
}

impl std::fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Submitting => "submitting",
            Self::Polling => "polling",
            Self::Configuring => "configuring",
            Self::Finalizing => "finalizing",
        };
        f.write_str(s)
    }
}

fn message_suffix(message: Option<&String>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

/// Terminal failure of [`RegistrationOrchestrator::register`](crate::services::RegistrationOrchestrator::register).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum RegistrationError {
    /// The registry refused the submission. Nothing was registered.
    #[error("Failed to submit registration for {domain}: {source}")]
    Submit {
        domain: String,
        source: ProviderError,
    },

    /// The operation reached `FAILED` or `ERROR`.
    #[error("Registration of {domain} ended with status {status}{}", message_suffix(.message.as_ref()))]
    Rejected {
        domain: String,
        operation: OperationHandle,
        status: OperationStatus,
        message: Option<String>,
    },

    /// The deadline passed while the operation was still running.
    ///
    /// The remote operation is not cancelled and may still complete.
    #[error("Registration of {domain} still {last_status} after {timeout_secs}s (operation {operation})")]
    Timeout {
        domain: String,
        operation: OperationHandle,
        timeout_secs: u64,
        last_status: OperationStatus,
        last_message: Option<String>,
    },

    /// The domain is registered but its nameservers could not be set.
    #[error("Domain {domain} registered but nameserver update failed: {source}")]
    NameserverUpdate {
        domain: String,
        source: ProviderError,
    },

    /// A read against the registry failed while polling or finalizing.
    #[error("Failed to read {domain} while {step}: {source}")]
    Read {
        domain: String,
        step: RegistrationStep,
        source: ProviderError,
    },
}

impl RegistrationError {
    /// Step in which the failure happened.
    pub fn step(&self) -> RegistrationStep {
        match self {
            Self::Submit { .. } => RegistrationStep::Submitting,
            Self::Rejected { .. } | Self::Timeout { .. } => RegistrationStep::Polling,
            Self::NameserverUpdate { .. } => RegistrationStep::Configuring,
            Self::Read { step, .. } => *step,
        }
    }

    /// Last message reported by the registry, if any.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Submit { source, .. }
            | Self::NameserverUpdate { source, .. }
            | Self::Read { source, .. } => source.raw_message(),
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Timeout { last_message, .. } => last_message.as_deref(),
        }
    }

    /// Whether the domain ended up registered.
    ///
    /// `None` when the outcome is unknown (timeout, failed status read).
    pub fn domain_registered(&self) -> Option<bool> {
        match self {
            Self::Submit { .. } | Self::Rejected { .. } => Some(false),
            Self::NameserverUpdate { .. } => Some(true),
            Self::Read { step, .. } => match step {
                RegistrationStep::Configuring | RegistrationStep::Finalizing => Some(true),
                RegistrationStep::Submitting => Some(false),
                RegistrationStep::Polling => None,
            },
            Self::Timeout { .. } => None,
        }
    }

    /// Operation handle, when the submission got that far.
    pub fn operation(&self) -> Option<&OperationHandle> {
        match self {
            Self::Rejected { operation, .. } | Self::Timeout { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Domain name not found
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// No price list entry for the TLD
    #[error("No pricing information found for TLD: {0}")]
    TldNotFound(String),

    /// The registry returned no expiration date, so a renewal cannot be submitted
    #[error("Expiration date unknown for {0}")]
    MissingExpirationDate(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Registration sequence failed
    #[error("{0}")]
    Registration(#[from] RegistrationError),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound(_)
            | Self::TldNotFound(_)
            | Self::MissingExpirationDate(_)
            | Self::ValidationError(_) => true,
            Self::Registration(RegistrationError::Rejected { .. }) => true,
            Self::Registration(
                RegistrationError::Submit { source, .. }
                | RegistrationError::NameserverUpdate { source, .. }
                | RegistrationError::Read { source, .. },
            ) => source.is_expected(),
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> ProviderError {
        ProviderError::NetworkError {
            provider: "mock".to_string(),
            detail: "connection reset".to_string(),
        }
    }

    #[test]
    fn step_per_variant() {
        let submit = RegistrationError::Submit {
            domain: "example.com".into(),
            source: network(),
        };
        let read = RegistrationError::Read {
            domain: "example.com".into(),
            step: RegistrationStep::Finalizing,
            source: network(),
        };
        assert_eq!(submit.step(), RegistrationStep::Submitting);
        assert_eq!(read.step(), RegistrationStep::Finalizing);
    }

    #[test]
    fn registered_flag() {
        let rejected = RegistrationError::Rejected {
            domain: "example.com".into(),
            operation: OperationHandle::new("op-1"),
            status: OperationStatus::Failed,
            message: Some("contact invalid".into()),
        };
        let timeout = RegistrationError::Timeout {
            domain: "example.com".into(),
            operation: OperationHandle::new("op-1"),
            timeout_secs: 30,
            last_status: OperationStatus::InProgress,
            last_message: None,
        };
        let ns = RegistrationError::NameserverUpdate {
            domain: "example.com".into(),
            source: network(),
        };
        let poll_read = RegistrationError::Read {
            domain: "example.com".into(),
            step: RegistrationStep::Polling,
            source: network(),
        };

        assert_eq!(rejected.domain_registered(), Some(false));
        assert_eq!(timeout.domain_registered(), None);
        assert_eq!(ns.domain_registered(), Some(true));
        assert_eq!(poll_read.domain_registered(), None);
    }

    #[test]
    fn remote_message_and_display() {
        let rejected = RegistrationError::Rejected {
            domain: "example.com".into(),
            operation: OperationHandle::new("op-1"),
            status: OperationStatus::Error,
            message: Some("registry unavailable".into()),
        };
        assert_eq!(rejected.remote_message(), Some("registry unavailable"));
        assert_eq!(
            rejected.to_string(),
            "Registration of example.com ended with status ERROR: registry unavailable"
        );

        let timeout = RegistrationError::Timeout {
            domain: "example.com".into(),
            operation: OperationHandle::new("op-7"),
            timeout_secs: 900,
            last_status: OperationStatus::InProgress,
            last_message: None,
        };
        assert_eq!(timeout.remote_message(), None);
        assert_eq!(
            timeout.to_string(),
            "Registration of example.com still IN_PROGRESS after 900s (operation op-7)"
        );
    }

    #[test]
    fn core_error_serializes_with_code() {
        let e = CoreError::TldNotFound("zz".into());
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["code"], "TldNotFound");
        assert_eq!(v["details"], "zz");
        assert!(e.is_expected());
    }

    #[test]
    fn provider_error_converts() {
        let e: CoreError = network().into();
        assert!(matches!(e, CoreError::Provider(_)));
        assert!(!e.is_expected());
    }
}
