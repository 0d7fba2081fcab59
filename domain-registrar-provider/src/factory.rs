//! Registry client factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::RegistryClient;
use crate::types::ProviderCredentials;

#[cfg(feature = "route53domains")]
use crate::providers::Route53DomainsProvider;
#[cfg(feature = "route53domains")]
use crate::utils::log_sanitizer::mask_credential;

/// Creates a [`RegistryClient`] instance from the given credentials.
///
/// The concrete client type is determined by the [`ProviderCredentials`] variant.
/// The returned client is wrapped in `Arc<dyn RegistryClient>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_registrar_provider::{create_registry_client, ProviderCredentials};
///
/// let client = create_registry_client(ProviderCredentials::Route53Domains {
///     access_key_id: "AKIA...".to_string(),
///     secret_access_key: "secret".to_string(),
///     session_token: None,
///     region: None,
/// }).unwrap();
/// ```
pub fn create_registry_client(credentials: ProviderCredentials) -> Result<Arc<dyn RegistryClient>> {
    match credentials {
        #[cfg(feature = "route53domains")]
        ProviderCredentials::Route53Domains {
            access_key_id,
            secret_access_key,
            session_token,
            region,
        } => {
            log::debug!(
                "Creating route53domains client for access key {}",
                mask_credential(&access_key_id)
            );
            let mut builder = Route53DomainsProvider::builder(access_key_id, secret_access_key)
                .session_token(session_token);
            if let Some(region) = region.filter(|r| !r.is_empty()) {
                builder = builder.region(region);
            }
            Ok(Arc::new(builder.build()))
        }
    }
}
