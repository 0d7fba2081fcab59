//! Amazon Route 53 Domains Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 Domains wire types (AWS JSON 1.1, `PascalCase` fields).
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

/// Route 53 Domains is only served from `us-east-1`.
pub(crate) const DEFAULT_REGION: &str = "us-east-1";
/// SigV4 service name
pub(crate) const SERVICE_NAME: &str = "route53domains";
/// `X-Amz-Target` prefix, followed by `.<Operation>`
pub(crate) const TARGET_PREFIX: &str = "Route53Domains_v20140515";
/// AWS JSON 1.1 content type
pub(crate) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
/// `ListPrices` 单页最大条目数
pub(crate) const MAX_PRICE_PAGE_SIZE: u32 = 1000;

/// Route 53 Domains registry client.
///
/// Authenticates via AWS Signature Version 4 with an access key pair and an
/// optional session token.
///
/// # Construction
///
/// ```rust,no_run
/// use domain_registrar_provider::Route53DomainsProvider;
///
/// let provider = Route53DomainsProvider::builder(
///     "your-access-key-id".to_string(),
///     "your-secret-access-key".to_string(),
/// )
/// .max_retries(3)
/// .build();
/// ```
pub struct Route53DomainsProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) session_token: Option<String>,
    pub(crate) region: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53DomainsProvider`].
pub struct Route53DomainsProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    region: String,
    max_retries: u32,
}

impl Route53DomainsProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            session_token: None,
            region: DEFAULT_REGION.to_string(),
            max_retries: 2,
        }
    }

    /// Attach a session token for temporary (STS) credentials.
    pub fn session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Override the API region (default: `us-east-1`).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`Route53DomainsProvider`] instance.
    pub fn build(self) -> Route53DomainsProvider {
        Route53DomainsProvider {
            client: create_http_client(),
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            session_token: self.session_token,
            region: self.region,
            max_retries: self.max_retries,
        }
    }
}

impl Route53DomainsProvider {
    /// Creates a client for `us-east-1` with default settings (2 retries).
    pub fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self::builder(access_key_id, secret_access_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(
        access_key_id: String,
        secret_access_key: String,
    ) -> Route53DomainsProviderBuilder {
        Route53DomainsProviderBuilder::new(access_key_id, secret_access_key)
    }

    /// API host for the configured region.
    pub(crate) fn host(&self) -> String {
        format!("route53domains.{}.amazonaws.com", self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_us_east_1() {
        let p = Route53DomainsProvider::new("ak".into(), "sk".into());
        assert_eq!(p.region, "us-east-1");
        assert_eq!(p.host(), "route53domains.us-east-1.amazonaws.com");
        assert_eq!(p.max_retries, 2);
        assert!(p.session_token.is_none());
    }

    #[test]
    fn builder_overrides() {
        let p = Route53DomainsProvider::builder("ak".into(), "sk".into())
            .region("eu-west-1")
            .session_token(Some("token".into()))
            .max_retries(0)
            .build();
        assert_eq!(p.host(), "route53domains.eu-west-1.amazonaws.com");
        assert_eq!(p.session_token.as_deref(), Some("token"));
        assert_eq!(p.max_retries, 0);
    }

    #[test]
    fn empty_session_token_ignored() {
        let p = Route53DomainsProvider::builder("ak".into(), "sk".into())
            .session_token(Some(String::new()))
            .build();
        assert!(p.session_token.is_none());
    }
}
