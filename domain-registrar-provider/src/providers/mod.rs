//! Registry client implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "route53domains")]
mod route53domains;

#[cfg(feature = "route53domains")]
pub use route53domains::{Route53DomainsProvider, Route53DomainsProviderBuilder};
