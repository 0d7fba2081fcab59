//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use domain_registrar_provider::{
    ContactDetail, ContactPrivacy, DomainAvailability, DomainContacts, DomainPrice, DomainRecord,
    HostedZone, OperationDetail, OperationHandle, OperationStatus, PricePage, PriceWithCurrency,
    ProviderError, RegistrationRequest, RegistryClient, Result, ZoneClient, ZoneRecord,
    ZoneVisibility,
};
use tokio::sync::RwLock;

use crate::config::{ManagedDomain, OrchestratorConfig};
use crate::services::ServiceContext;

pub const MOCK_PROVIDER: &str = "mock";

pub fn network_error(detail: &str) -> ProviderError {
    ProviderError::NetworkError {
        provider: MOCK_PROVIDER.to_string(),
        detail: detail.to_string(),
    }
}

pub fn contact() -> ContactDetail {
    ContactDetail {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "+44.2071234567".to_string(),
        address_line_1: "12 St James's Square".to_string(),
        city: "London".to_string(),
        state: "London".to_string(),
        zip_code: "SW1Y 4JH".to_string(),
        country_code: "GB".to_string(),
        ..Default::default()
    }
}

pub fn request(domain: &str) -> RegistrationRequest {
    RegistrationRequest::new(domain, DomainContacts::uniform(contact()))
}

pub fn managed(domain: &str) -> ManagedDomain {
    ManagedDomain::new(request(domain))
}

// ===== MockRegistryClient =====

/// Call counters per registry action.
#[derive(Debug, Default, Clone)]
pub struct RegistryCalls {
    pub register: u32,
    pub get_operation: u32,
    pub update_nameservers: u32,
    pub get_domain: u32,
    pub renew: u32,
    pub enable_auto_renew: u32,
    pub disable_auto_renew: u32,
    pub update_contacts: u32,
    pub update_privacy: u32,
    pub delete: u32,
    pub check_availability: u32,
    pub list_prices: u32,
}

/// Scripted in-memory registry.
///
/// `get_operation_detail` pops statuses from a queue; once the queue is empty
/// the last popped status repeats.
pub struct MockRegistryClient {
    statuses: RwLock<VecDeque<OperationStatus>>,
    last_status: RwLock<OperationStatus>,
    status_message: RwLock<Option<String>>,
    domains: RwLock<HashMap<String, DomainRecord>>,
    availability: RwLock<HashMap<String, DomainAvailability>>,
    price_pages: RwLock<Vec<PricePage>>,
    calls: RwLock<RegistryCalls>,
    // 错误注入
    register_error: RwLock<Option<ProviderError>>,
    operation_error: RwLock<Option<ProviderError>>,
    nameserver_error: RwLock<Option<ProviderError>>,
    detail_error: RwLock<Option<ProviderError>>,
    delete_error: RwLock<Option<ProviderError>>,
    last_renewal: RwLock<Option<(String, u8, i32)>>,
    last_nameservers: RwLock<Option<Vec<String>>>,
    last_privacy: RwLock<Option<ContactPrivacy>>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self {
            statuses: RwLock::new(VecDeque::new()),
            last_status: RwLock::new(OperationStatus::Pending),
            status_message: RwLock::new(None),
            domains: RwLock::new(HashMap::new()),
            availability: RwLock::new(HashMap::new()),
            price_pages: RwLock::new(Vec::new()),
            calls: RwLock::new(RegistryCalls::default()),
            register_error: RwLock::new(None),
            operation_error: RwLock::new(None),
            nameserver_error: RwLock::new(None),
            detail_error: RwLock::new(None),
            delete_error: RwLock::new(None),
            last_renewal: RwLock::new(None),
            last_nameservers: RwLock::new(None),
            last_privacy: RwLock::new(None),
        }
    }

    /// Registry whose operations report `statuses` in order.
    pub fn with_statuses(statuses: &[OperationStatus]) -> Self {
        Self {
            statuses: RwLock::new(statuses.iter().copied().collect()),
            ..Self::new()
        }
    }

    pub async fn set_status_message(&self, message: Option<&str>) {
        *self.status_message.write().await = message.map(str::to_string);
    }

    pub async fn insert_domain(&self, record: DomainRecord) {
        self.domains
            .write()
            .await
            .insert(record.domain_name.clone(), record);
    }

    pub async fn set_availability(&self, domain: &str, availability: DomainAvailability) {
        self.availability
            .write()
            .await
            .insert(domain.to_string(), availability);
    }

    pub async fn set_price_pages(&self, pages: Vec<PricePage>) {
        *self.price_pages.write().await = pages;
    }

    pub async fn set_register_error(&self, err: Option<ProviderError>) {
        *self.register_error.write().await = err;
    }

    pub async fn set_operation_error(&self, err: Option<ProviderError>) {
        *self.operation_error.write().await = err;
    }

    pub async fn set_nameserver_error(&self, err: Option<ProviderError>) {
        *self.nameserver_error.write().await = err;
    }

    pub async fn set_detail_error(&self, err: Option<ProviderError>) {
        *self.detail_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<ProviderError>) {
        *self.delete_error.write().await = err;
    }

    pub async fn calls(&self) -> RegistryCalls {
        self.calls.read().await.clone()
    }

    pub async fn last_renewal(&self) -> Option<(String, u8, i32)> {
        self.last_renewal.read().await.clone()
    }

    pub async fn last_nameservers(&self) -> Option<Vec<String>> {
        self.last_nameservers.read().await.clone()
    }

    pub async fn last_privacy(&self) -> Option<ContactPrivacy> {
        *self.last_privacy.read().await
    }

    fn not_found(domain: &str) -> ProviderError {
        ProviderError::DomainNotFound {
            provider: MOCK_PROVIDER.to_string(),
            domain: domain.to_string(),
            raw_message: None,
        }
    }

    async fn read_domain(&self, domain: &str) -> Result<DomainRecord> {
        if let Some(err) = self.detail_error.read().await.clone() {
            return Err(err);
        }
        self.domains
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| Self::not_found(domain))
    }
}

/// Registered-domain snapshot used by the mock after a successful registration.
pub fn registered_record(domain: &str) -> DomainRecord {
    DomainRecord {
        domain_name: domain.to_string(),
        status_list: vec!["clientTransferProhibited".to_string()],
        nameservers: vec![
            "ns-1.awsdns-01.org".to_string(),
            "ns-2.awsdns-02.net".to_string(),
        ],
        auto_renew: Some(false),
        registrar_name: Some("Mock Registrar".to_string()),
        creation_date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).single(),
        expiration_date: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).single(),
        ..Default::default()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    fn id(&self) -> &'static str {
        MOCK_PROVIDER
    }

    async fn register_domain(&self, request: &RegistrationRequest) -> Result<OperationHandle> {
        self.calls.write().await.register += 1;
        if let Some(err) = self.register_error.read().await.clone() {
            return Err(err);
        }
        let domain = request.domain_name.clone();
        self.domains
            .write()
            .await
            .entry(domain.clone())
            .or_insert_with(|| registered_record(&domain));
        Ok(OperationHandle::new(format!("op-register-{domain}")))
    }

    async fn get_operation_detail(&self, handle: &OperationHandle) -> Result<OperationDetail> {
        self.calls.write().await.get_operation += 1;
        if let Some(err) = self.operation_error.read().await.clone() {
            return Err(err);
        }
        let status = match self.statuses.write().await.pop_front() {
            Some(s) => {
                *self.last_status.write().await = s;
                s
            }
            None => *self.last_status.read().await,
        };
        Ok(OperationDetail {
            handle: handle.clone(),
            status,
            message: self.status_message.read().await.clone(),
            domain_name: None,
            submitted_at: None,
        })
    }

    async fn update_nameservers(
        &self,
        domain_name: &str,
        nameservers: &[String],
    ) -> Result<OperationHandle> {
        self.calls.write().await.update_nameservers += 1;
        if let Some(err) = self.nameserver_error.read().await.clone() {
            return Err(err);
        }
        *self.last_nameservers.write().await = Some(nameservers.to_vec());
        if let Some(record) = self.domains.write().await.get_mut(domain_name) {
            record.nameservers = nameservers.to_vec();
        }
        Ok(OperationHandle::new(format!("op-ns-{domain_name}")))
    }

    async fn get_domain_detail(&self, domain_name: &str) -> Result<DomainRecord> {
        self.calls.write().await.get_domain += 1;
        self.read_domain(domain_name).await
    }

    async fn renew_domain(
        &self,
        domain_name: &str,
        duration_years: u8,
        current_expiry_year: i32,
    ) -> Result<OperationHandle> {
        self.calls.write().await.renew += 1;
        *self.last_renewal.write().await =
            Some((domain_name.to_string(), duration_years, current_expiry_year));
        Ok(OperationHandle::new(format!("op-renew-{domain_name}")))
    }

    async fn enable_auto_renew(&self, domain_name: &str) -> Result<()> {
        self.calls.write().await.enable_auto_renew += 1;
        let mut domains = self.domains.write().await;
        let record = domains
            .get_mut(domain_name)
            .ok_or_else(|| Self::not_found(domain_name))?;
        record.auto_renew = Some(true);
        Ok(())
    }

    async fn disable_auto_renew(&self, domain_name: &str) -> Result<()> {
        self.calls.write().await.disable_auto_renew += 1;
        let mut domains = self.domains.write().await;
        let record = domains
            .get_mut(domain_name)
            .ok_or_else(|| Self::not_found(domain_name))?;
        record.auto_renew = Some(false);
        Ok(())
    }

    async fn update_contacts(
        &self,
        domain_name: &str,
        contacts: &DomainContacts,
    ) -> Result<OperationHandle> {
        self.calls.write().await.update_contacts += 1;
        if let Some(record) = self.domains.write().await.get_mut(domain_name) {
            record.admin_contact = Some(contacts.admin.clone());
            record.registrant_contact = Some(contacts.registrant.clone());
            record.tech_contact = Some(contacts.tech.clone());
        }
        Ok(OperationHandle::new(format!("op-contacts-{domain_name}")))
    }

    async fn update_contact_privacy(
        &self,
        domain_name: &str,
        privacy: &ContactPrivacy,
    ) -> Result<OperationHandle> {
        self.calls.write().await.update_privacy += 1;
        *self.last_privacy.write().await = Some(*privacy);
        if let Some(record) = self.domains.write().await.get_mut(domain_name) {
            record.privacy = Some(*privacy);
        }
        Ok(OperationHandle::new(format!("op-privacy-{domain_name}")))
    }

    async fn delete_domain(&self, domain_name: &str) -> Result<OperationHandle> {
        self.calls.write().await.delete += 1;
        if let Some(err) = self.delete_error.read().await.clone() {
            return Err(err);
        }
        self.domains.write().await.remove(domain_name);
        Ok(OperationHandle::new(format!("op-delete-{domain_name}")))
    }

    async fn check_availability(&self, domain_name: &str) -> Result<DomainAvailability> {
        self.calls.write().await.check_availability += 1;
        if domain_name.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: MOCK_PROVIDER.to_string(),
                param: "domain_name".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        Ok(self
            .availability
            .read()
            .await
            .get(domain_name)
            .copied()
            .unwrap_or(DomainAvailability::Available))
    }

    async fn list_prices(&self, _tld: Option<&str>, marker: Option<&str>) -> Result<PricePage> {
        self.calls.write().await.list_prices += 1;
        // marker 为页码字符串
        let index = marker.and_then(|m| m.parse::<usize>().ok()).unwrap_or(0);
        Ok(self
            .price_pages
            .read()
            .await
            .get(index)
            .cloned()
            .unwrap_or_default())
    }
}

pub fn price(tld: &str, registration: f64) -> DomainPrice {
    DomainPrice {
        tld: tld.to_string(),
        registration: Some(PriceWithCurrency {
            price: registration,
            currency: "USD".to_string(),
        }),
        renewal: Some(PriceWithCurrency {
            price: registration,
            currency: "USD".to_string(),
        }),
        transfer: None,
        change_ownership: None,
        restoration: None,
    }
}

// ===== MockZoneClient =====

/// Call counters per hosted-zone action.
#[derive(Debug, Default, Clone)]
pub struct ZoneCalls {
    pub list_zones: u32,
    pub list_records: u32,
    pub delete: u32,
}

/// In-memory hosted-zone store.
///
/// `list_zones_by_name` mimics the remote API: zones sorted by reversed
/// labels, starting at the first zone not before the requested name.
pub struct MockZoneClient {
    zones: RwLock<Vec<HostedZone>>,
    records: RwLock<HashMap<String, Vec<ZoneRecord>>>,
    calls: RwLock<ZoneCalls>,
    list_error: RwLock<Option<ProviderError>>,
    records_error: RwLock<Option<ProviderError>>,
    delete_error: RwLock<Option<ProviderError>>,
}

/// "sub.example.com." -> "com.example.sub"
fn sort_key(name: &str) -> String {
    let trimmed = name.trim_end_matches('.').to_ascii_lowercase();
    trimmed.rsplit('.').collect::<Vec<_>>().join(".")
}

impl MockZoneClient {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            records: RwLock::new(HashMap::new()),
            calls: RwLock::new(ZoneCalls::default()),
            list_error: RwLock::new(None),
            records_error: RwLock::new(None),
            delete_error: RwLock::new(None),
        }
    }

    pub async fn add_zone(&self, zone: HostedZone, records: Vec<ZoneRecord>) {
        self.records
            .write()
            .await
            .insert(zone.bare_id().to_string(), records);
        self.zones.write().await.push(zone);
    }

    pub async fn zone_count(&self) -> usize {
        self.zones.read().await.len()
    }

    pub async fn calls(&self) -> ZoneCalls {
        self.calls.read().await.clone()
    }

    pub async fn set_list_error(&self, err: Option<ProviderError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_records_error(&self, err: Option<ProviderError>) {
        *self.records_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<ProviderError>) {
        *self.delete_error.write().await = err;
    }
}

/// Public zone created by the registrar, as the registry leaves it.
pub fn registrar_zone(id: &str, name: &str) -> HostedZone {
    HostedZone {
        id: format!("/hostedzone/{id}"),
        name: name.to_string(),
        visibility: ZoneVisibility::Public,
        comment: Some(crate::services::REGISTRAR_ZONE_COMMENT.to_string()),
        record_count: Some(2),
    }
}

pub fn default_records(name: &str) -> Vec<ZoneRecord> {
    vec![ZoneRecord::new(name, "NS"), ZoneRecord::new(name, "SOA")]
}

#[async_trait]
impl ZoneClient for MockZoneClient {
    fn id(&self) -> &'static str {
        MOCK_PROVIDER
    }

    async fn list_zones_by_name(&self, dns_name: &str) -> Result<Vec<HostedZone>> {
        self.calls.write().await.list_zones += 1;
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        let start = sort_key(dns_name);
        let mut zones: Vec<HostedZone> = self
            .zones
            .read()
            .await
            .iter()
            .filter(|z| sort_key(&z.name) >= start)
            .cloned()
            .collect();
        zones.sort_by_key(|z| sort_key(&z.name));
        Ok(zones)
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<ZoneRecord>> {
        self.calls.write().await.list_records += 1;
        if let Some(err) = self.records_error.read().await.clone() {
            return Err(err);
        }
        self.records
            .read()
            .await
            .get(zone_id)
            .cloned()
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: MOCK_PROVIDER.to_string(),
                zone_id: zone_id.to_string(),
                raw_message: None,
            })
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        self.calls.write().await.delete += 1;
        if let Some(err) = self.delete_error.read().await.clone() {
            return Err(err);
        }
        self.zones.write().await.retain(|z| z.bare_id() != zone_id);
        self.records.write().await.remove(zone_id);
        Ok(())
    }
}

// ===== 工厂方法 =====

pub fn fixed_interval(secs: u64) -> OrchestratorConfig {
    OrchestratorConfig {
        poll_interval_secs: secs,
        ..Default::default()
    }
}

/// 构建带 mock 依赖的 `ServiceContext`
pub fn make_context(
    registry: Arc<MockRegistryClient>,
    zones: Arc<MockZoneClient>,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(registry, zones, fixed_interval(10)))
}
