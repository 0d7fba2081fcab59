//! Hosted zone 安全删除
//!
//! The registry creates a public hosted zone next to every new domain. The
//! guard removes it only when it is still exactly what the registry created:
//! same name, public, the registrar's comment, and nothing but NS/SOA records.

use std::sync::Arc;

use serde::Serialize;

use domain_registrar_provider::{
    same_domain_name, to_dns_name, HostedZone, ProviderError, Result, ZoneClient,
};

/// Comment the registry attaches to the zones it creates.
pub const REGISTRAR_ZONE_COMMENT: &str = "HostedZone created by Route53 Registrar";

/// Record types present in a freshly created zone.
const DEFAULT_RECORD_TYPES: [&str; 2] = ["NS", "SOA"];

/// Why a zone was left in place.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// No zone with exactly this name.
    NotFound,
    /// The zone is not publicly resolvable.
    Private,
    /// The zone was not created by the registrar.
    CommentMismatch { actual: Option<String> },
    /// The zone holds a record beyond the default NS/SOA set.
    HasCustomRecords { name: String, record_type: String },
    /// A remote call failed; the zone state is unknown.
    RemoteError(ProviderError),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no hosted zone found"),
            Self::Private => write!(f, "hosted zone is private"),
            Self::CommentMismatch { actual } => write!(
                f,
                "hosted zone comment is {:?}, expected {REGISTRAR_ZONE_COMMENT:?}",
                actual.as_deref().unwrap_or("")
            ),
            Self::HasCustomRecords { name, record_type } => {
                write!(f, "hosted zone has custom record {name} ({record_type})")
            }
            Self::RemoteError(e) => write!(f, "remote error: {e}"),
        }
    }
}

/// Outcome of [`ZoneGuard::safe_delete`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ZoneDeletion {
    Deleted { zone_id: String },
    Skipped(SkipReason),
}

impl ZoneDeletion {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Locates and conditionally deletes the registrar-created hosted zone.
pub struct ZoneGuard {
    zones: Arc<dyn ZoneClient>,
}

impl ZoneGuard {
    #[must_use]
    pub fn new(zones: Arc<dyn ZoneClient>) -> Self {
        Self { zones }
    }

    /// Find the zone whose name is exactly `domain`.
    ///
    /// The listing starts at the domain name and may contain neighbours such
    /// as `sub.example.com.`; only an exact normalized match counts.
    pub async fn locate(&self, domain: &str) -> Result<Option<HostedZone>> {
        let zones = self.zones.list_zones_by_name(&to_dns_name(domain)).await?;
        Ok(zones
            .into_iter()
            .find(|zone| same_domain_name(&zone.name, domain)))
    }

    /// Like [`locate`](Self::locate), returning the id without its `/hostedzone/` prefix.
    pub async fn locate_zone_id(&self, domain: &str) -> Result<Option<String>> {
        Ok(self
            .locate(domain)
            .await?
            .map(|zone| zone.bare_id().to_string()))
    }

    /// Delete the zone of `domain` if every safety check passes.
    ///
    /// Never fails: anything that prevents the deletion, remote errors
    /// included, is reported as [`ZoneDeletion::Skipped`].
    pub async fn safe_delete(&self, domain: &str) -> ZoneDeletion {
        match self.try_delete(domain).await {
            Ok(zone_id) => {
                log::info!("[{domain}] Deleted hosted zone {zone_id}");
                ZoneDeletion::Deleted { zone_id }
            }
            Err(reason) => {
                log::warn!("[{domain}] Not deleting hosted zone: {reason}");
                ZoneDeletion::Skipped(reason)
            }
        }
    }

    async fn try_delete(&self, domain: &str) -> std::result::Result<String, SkipReason> {
        let zone = self
            .locate(domain)
            .await
            .map_err(SkipReason::RemoteError)?
            .ok_or(SkipReason::NotFound)?;

        if zone.is_private() {
            return Err(SkipReason::Private);
        }
        if zone.comment.as_deref() != Some(REGISTRAR_ZONE_COMMENT) {
            return Err(SkipReason::CommentMismatch {
                actual: zone.comment,
            });
        }

        let zone_id = zone.bare_id().to_string();
        let records = self
            .zones
            .list_records(&zone_id)
            .await
            .map_err(SkipReason::RemoteError)?;

        if let Some(custom) = records.into_iter().find(|r| {
            !DEFAULT_RECORD_TYPES
                .iter()
                .any(|t| r.record_type.eq_ignore_ascii_case(t))
        }) {
            return Err(SkipReason::HasCustomRecords {
                name: custom.name,
                record_type: custom.record_type,
            });
        }

        log::debug!("[{domain}] Hosted zone {zone_id} holds only default records, deleting");
        self.zones
            .delete_zone(&zone_id)
            .await
            .map_err(SkipReason::RemoteError)?;
        Ok(zone_id)
    }
}
