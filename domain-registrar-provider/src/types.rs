use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// Shortest registration period accepted by registries, in years.
pub const MIN_DURATION_YEARS: u8 = 1;
/// Longest registration period accepted by registries, in years.
pub const MAX_DURATION_YEARS: u8 = 10;
/// Default wall-clock budget for a registration to reach a terminal status.
pub const DEFAULT_REGISTRATION_TIMEOUT_SECS: u64 = 900;

// ============ Provider Types ============

/// Identifies which registry client implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Amazon Route 53 Domains. Requires feature `route53domains`.
    #[cfg(feature = "route53domains")]
    Route53Domains,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "route53domains")]
            Self::Route53Domains => write!(f, "route53domains"),
        }
    }
}

/// Type-safe credential container for all supported registries.
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "route53domains", "credentials": { "access_key_id": "...", "secret_access_key": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// AWS credentials for Route 53 Domains. Requires feature `route53domains`.
    #[cfg(feature = "route53domains")]
    #[serde(rename = "route53domains")]
    Route53Domains {
        /// AWS access key id.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// Session token for temporary credentials.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_token: Option<String>,
        /// API region. Route 53 Domains is only served from `us-east-1`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<String>,
    },
}

impl ProviderCredentials {
    /// Returns the provider type these credentials belong to.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "route53domains")]
            Self::Route53Domains { .. } => ProviderType::Route53Domains,
        }
    }
}

// ============ Contact Types ============

/// Legal category of a domain contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    /// A natural person (registry default).
    #[default]
    Person,
    /// A company.
    Company,
    /// An association.
    Association,
    /// A public body.
    PublicBody,
    /// A reseller.
    Reseller,
}

impl ContactType {
    /// Wire representation used by registries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Company => "COMPANY",
            Self::Association => "ASSOCIATION",
            Self::PublicBody => "PUBLIC_BODY",
            Self::Reseller => "RESELLER",
        }
    }

    /// Parse a wire value, returning `None` for unrecognized categories.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PERSON" => Some(Self::Person),
            "COMPANY" => Some(Self::Company),
            "ASSOCIATION" => Some(Self::Association),
            "PUBLIC_BODY" => Some(Self::PublicBody),
            "RESELLER" => Some(Self::Reseller),
            _ => None,
        }
    }
}

/// Identity and postal address of one domain contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Legal category of the contact.
    #[serde(default)]
    pub contact_type: ContactType,
    /// Organization name, required by registries for non-person contacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Phone number in `+CC.NUMBER` form (e.g., `"+1.5551234567"`).
    pub phone_number: String,
    /// First street address line.
    pub address_line_1: String,
    /// Second street address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Two-letter ISO country code.
    pub country_code: String,
}

/// The three contacts every registration carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainContacts {
    /// Administrative contact.
    pub admin: ContactDetail,
    /// Registrant (owner) contact.
    pub registrant: ContactDetail,
    /// Technical contact.
    pub tech: ContactDetail,
}

impl DomainContacts {
    /// Use the same contact for all three roles.
    pub fn uniform(contact: ContactDetail) -> Self {
        Self {
            admin: contact.clone(),
            registrant: contact.clone(),
            tech: contact,
        }
    }
}

/// WHOIS privacy protection flags, one per contact role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPrivacy {
    /// Hide the administrative contact.
    pub admin: bool,
    /// Hide the registrant contact.
    pub registrant: bool,
    /// Hide the technical contact.
    pub tech: bool,
}

impl Default for ContactPrivacy {
    fn default() -> Self {
        Self {
            admin: true,
            registrant: true,
            tech: true,
        }
    }
}

// ============ Registration Types ============

fn default_duration_years() -> u8 {
    MIN_DURATION_YEARS
}

fn default_registration_timeout_secs() -> u64 {
    DEFAULT_REGISTRATION_TIMEOUT_SECS
}

/// Everything a registry needs to register one domain.
///
/// Immutable once submitted. The orchestrator assumes the request has
/// already been validated; [`validate()`](Self::validate) is available for
/// callers that want the same checks the concrete clients apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Fully qualified domain name without trailing dot (e.g., `"example.com"`).
    pub domain_name: String,
    /// Registration period in years (1-10).
    #[serde(default = "default_duration_years")]
    pub duration_years: u8,
    /// Whether the registry renews the domain automatically before expiry.
    #[serde(default)]
    pub auto_renew: bool,
    /// Admin, registrant and tech contacts.
    pub contacts: DomainContacts,
    /// WHOIS privacy flags.
    #[serde(default)]
    pub privacy: ContactPrivacy,
    /// Custom nameserver hostnames; empty keeps the registry defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    /// Seconds to wait for the registration to reach a terminal status.
    #[serde(default = "default_registration_timeout_secs")]
    pub registration_timeout_secs: u64,
}

impl RegistrationRequest {
    /// Create a request with the registry defaults: one year, no auto-renew,
    /// privacy on for every contact, registry nameservers, 900s timeout.
    pub fn new(domain_name: impl Into<String>, contacts: DomainContacts) -> Self {
        Self {
            domain_name: domain_name.into(),
            duration_years: default_duration_years(),
            auto_renew: false,
            contacts,
            privacy: ContactPrivacy::default(),
            nameservers: Vec::new(),
            registration_timeout_secs: default_registration_timeout_secs(),
        }
    }

    /// The registration wait budget as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.registration_timeout_secs)
    }

    /// Check the fields registries reject outright.
    pub fn validate(&self, provider: &str) -> Result<()> {
        if self.domain_name.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: "domain_name".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        if !(MIN_DURATION_YEARS..=MAX_DURATION_YEARS).contains(&self.duration_years) {
            return Err(ProviderError::InvalidParameter {
                provider: provider.to_string(),
                param: "duration_years".to_string(),
                detail: format!(
                    "must be between {MIN_DURATION_YEARS} and {MAX_DURATION_YEARS}, got {}",
                    self.duration_years
                ),
            });
        }
        Ok(())
    }
}

/// Opaque identifier of an in-flight asynchronous registry action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationHandle(String);

impl OperationHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of an asynchronous registry operation. Polled, never pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    /// Accepted but not started.
    Pending,
    /// Being processed by the registry.
    InProgress,
    /// Completed successfully.
    Successful,
    /// Rejected by the registry.
    Failed,
    /// The registry hit an internal error.
    Error,
}

impl OperationStatus {
    /// Whether polling can stop.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Successful | Self::Failed | Self::Error)
    }

    /// Whether the operation ended badly.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Error)
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// One status observation of an asynchronous operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDetail {
    /// The operation this observation belongs to.
    pub handle: OperationHandle,
    /// Current status.
    pub status: OperationStatus,
    /// Remote explanation, usually present for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Domain the operation acts on, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// When the registry accepted the operation.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

// ============ Domain Types ============

/// The registry's view of a registered domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Domain name.
    pub domain_name: String,
    /// EPP status codes (e.g., `"clientTransferProhibited"`).
    pub status_list: Vec<String>,
    /// Nameserver hostnames currently delegated to.
    pub nameservers: Vec<String>,
    /// Whether auto-renew is enabled, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Administrative contact, if disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<ContactDetail>,
    /// Registrant contact, if disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_contact: Option<ContactDetail>,
    /// Technical contact, if disclosed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<ContactDetail>,
    /// WHOIS privacy flags, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<ContactPrivacy>,
    /// Sponsoring registrar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_name: Option<String>,
    /// When the domain was first registered.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// When the registration was last changed.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    /// When the registration lapses.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl DomainRecord {
    /// The first reported status code, which registries list most significant first.
    pub fn primary_status(&self) -> Option<&str> {
        self.status_list.first().map(String::as_str)
    }

    /// Calendar year of expiry; renewals are keyed on it.
    pub fn expiration_year(&self) -> Option<i32> {
        self.expiration_date.map(|d| d.year())
    }
}

// ============ Hosted Zone Types ============

/// Whether a hosted zone answers on the public internet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneVisibility {
    Public,
    Private,
}

/// Prefix some DNS services put in front of zone identifiers.
const HOSTED_ZONE_ID_PREFIX: &str = "/hostedzone/";

/// A DNS zone owned by the DNS subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Zone identifier as returned by the DNS service.
    pub id: String,
    /// Zone name, usually with trailing dot (e.g., `"example.com."`).
    pub name: String,
    /// Public or private.
    pub visibility: ZoneVisibility,
    /// Free-text comment attached at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Number of record sets, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

impl HostedZone {
    /// Zone id without the `/hostedzone/` path prefix.
    pub fn bare_id(&self) -> &str {
        self.id
            .strip_prefix(HOSTED_ZONE_ID_PREFIX)
            .unwrap_or(&self.id)
    }

    pub fn is_private(&self) -> bool {
        self.visibility == ZoneVisibility::Private
    }
}

/// One record set inside a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    /// Owner name (e.g., `"www.example.com."`).
    pub name: String,
    /// Record type tag (e.g., `"NS"`, `"SOA"`, `"A"`).
    pub record_type: String,
}

impl ZoneRecord {
    pub fn new(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
        }
    }
}

// ============ Catalog Types ============

/// Registry answer to "can this name be registered?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainAvailability {
    Available,
    AvailableReserved,
    AvailablePreorder,
    Unavailable,
    UnavailablePremium,
    UnavailableRestricted,
    Reserved,
    Pending,
    InvalidNameForTld,
    DontKnow,
}

impl DomainAvailability {
    /// Whether a registration request can be submitted for the name.
    pub fn is_available(self) -> bool {
        matches!(
            self,
            Self::Available | Self::AvailableReserved | Self::AvailablePreorder
        )
    }
}

/// An amount in a named currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceWithCurrency {
    pub price: f64,
    /// ISO 4217 currency code (e.g., `"USD"`).
    pub currency: String,
}

/// Per-TLD price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPrice {
    /// Top-level domain without leading dot (e.g., `"com"`).
    pub tld: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<PriceWithCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal: Option<PriceWithCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<PriceWithCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_ownership: Option<PriceWithCurrency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restoration: Option<PriceWithCurrency>,
}

/// One page of a price listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePage {
    pub prices: Vec<DomainPrice>,
    /// Marker for the next page; `None` on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}
