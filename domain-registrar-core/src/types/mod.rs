//! 类型定义模块

mod catalog;
mod domain;

pub use catalog::AvailabilityReport;
pub use domain::{DomainDeletion, ProvisionedDomain};

// Re-export provider 库的公共类型
pub use domain_registrar_provider::{
    ContactDetail, ContactPrivacy, ContactType, DomainAvailability, DomainContacts, DomainPrice,
    DomainRecord, HostedZone, OperationDetail, OperationHandle, OperationStatus, PricePage,
    PriceWithCurrency, ProviderCredentials, ProviderType, RegistrationRequest, ZoneRecord,
    ZoneVisibility,
};
