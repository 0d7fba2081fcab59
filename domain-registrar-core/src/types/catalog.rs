//! Catalog type definitions

use serde::Serialize;

use domain_registrar_provider::DomainAvailability;

/// Availability of one domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub domain: String,
    /// Raw registry answer
    pub availability: DomainAvailability,
    /// Whether a registration can be submitted
    pub available: bool,
}

impl AvailabilityReport {
    #[must_use]
    pub fn new(domain: impl Into<String>, availability: DomainAvailability) -> Self {
        Self {
            domain: domain.into(),
            availability,
            available: availability.is_available(),
        }
    }
}
