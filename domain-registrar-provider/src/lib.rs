//! # domain-registrar-provider
//!
//! Registry and hosted-zone client abstractions for domain registration
//! workflows, with an Amazon Route 53 Domains implementation.
//!
//! ## Supported Registries
//!
//! | Registry | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Route 53 Domains](https://aws.amazon.com/route53/) | `route53domains` | AWS Signature V4 |
//!
//! The hosted-zone side ([`ZoneClient`]) is a trait only; plug in any DNS
//! backend that can list zones, list record sets and delete a zone.
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable every registry listed above.
//! - **`route53domains`**: enable only the Route 53 Domains client.
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_registrar_provider::{
//!     create_registry_client, ContactDetail, DomainContacts, ProviderCredentials,
//!     RegistrationRequest, RegistryClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_registry_client(ProviderCredentials::Route53Domains {
//!         access_key_id: "AKIA...".to_string(),
//!         secret_access_key: "secret".to_string(),
//!         session_token: None,
//!         region: None,
//!     })?;
//!
//!     let availability = client.check_availability("example.com").await?;
//!     println!("example.com: {availability:?}");
//!
//!     let contacts = DomainContacts::uniform(ContactDetail {
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!         email: "ada@example.com".to_string(),
//!         ..Default::default()
//!     });
//!     let handle = client
//!         .register_domain(&RegistrationRequest::new("example.com", contacts))
//!         .await?;
//!     let detail = client.get_operation_detail(&handle).await?;
//!     println!("{handle}: {}", detail.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All client operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are automatically
//! retried with exponential backoff; registry business errors such as
//! [`ProviderError::DuplicateRequest`] are returned on the first attempt.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_registry_client;

// Re-export capability traits only (internal traits are not exported)
pub use traits::{RegistryClient, ZoneClient};

// Re-export types
pub use types::{
    ContactDetail, ContactPrivacy, ContactType, DEFAULT_REGISTRATION_TIMEOUT_SECS, DomainAvailability,
    DomainContacts, DomainPrice, DomainRecord, HostedZone, MAX_DURATION_YEARS, MIN_DURATION_YEARS,
    OperationDetail, OperationHandle, OperationStatus, PricePage, PriceWithCurrency,
    ProviderCredentials, ProviderType, RegistrationRequest, ZoneRecord, ZoneVisibility,
};

// Re-export utils module
pub use providers::common::{normalize_domain_name, same_domain_name, to_dns_name};
pub use utils::datetime;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53domains")]
pub use providers::{Route53DomainsProvider, Route53DomainsProviderBuilder};
