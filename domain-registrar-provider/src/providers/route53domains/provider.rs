//! Route 53 Domains `RegistryClient` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_domain_name;
use crate::traits::{ErrorContext, ProviderErrorMapper, RegistryClient};
use crate::types::{
    ContactPrivacy, DomainAvailability, DomainContacts, DomainPrice, DomainRecord,
    OperationDetail, OperationHandle, OperationStatus, PricePage, PriceWithCurrency,
    RegistrationRequest,
};
use crate::utils::datetime::parse_epoch_seconds;

use super::types::{
    CheckDomainAvailabilityResponse, Contact, DomainNameRequest, EmptyResponse,
    GetDomainDetailResponse, GetOperationDetailResponse, ListPricesRequest, ListPricesResponse,
    Nameserver, OperationIdRequest, OperationIdResponse, RegisterDomainRequest,
    RenewDomainRequest, UpdateDomainContactPrivacyRequest, UpdateDomainContactRequest,
    UpdateDomainNameserversRequest,
};
use super::{MAX_PRICE_PAGE_SIZE, Route53DomainsProvider};

impl Route53DomainsProvider {
    /// 将 API 操作状态转换为内部状态
    pub(crate) fn convert_operation_status(&self, status: Option<&str>) -> Result<OperationStatus> {
        match status {
            Some("SUBMITTED") => Ok(OperationStatus::Pending),
            Some("IN_PROGRESS") => Ok(OperationStatus::InProgress),
            Some("SUCCESSFUL") => Ok(OperationStatus::Successful),
            Some("FAILED") => Ok(OperationStatus::Failed),
            Some("ERROR") => Ok(OperationStatus::Error),
            Some(other) => Err(self.parse_error(format!("unknown operation status '{other}'"))),
            None => Err(self.parse_error("operation status missing")),
        }
    }

    /// Extract the operation id every asynchronous action must return.
    fn require_operation(&self, action: &str, resp: OperationIdResponse) -> Result<OperationHandle> {
        resp.operation_id
            .filter(|id| !id.is_empty())
            .map(OperationHandle::new)
            .ok_or_else(|| self.parse_error(format!("{action} returned no OperationId")))
    }

    /// Availability strings share the enum's wire names.
    fn convert_availability(&self, value: Option<String>) -> Result<DomainAvailability> {
        let value = value.ok_or_else(|| self.parse_error("Availability missing"))?;
        serde_json::from_value(serde_json::Value::String(value.clone()))
            .map_err(|_| self.parse_error(format!("unknown availability '{value}'")))
    }

    fn convert_domain_detail(domain_name: &str, resp: GetDomainDetailResponse) -> DomainRecord {
        let privacy = match (resp.admin_privacy, resp.registrant_privacy, resp.tech_privacy) {
            (Some(admin), Some(registrant), Some(tech)) => Some(ContactPrivacy {
                admin,
                registrant,
                tech,
            }),
            _ => None,
        };

        DomainRecord {
            domain_name: resp.domain_name.unwrap_or_else(|| domain_name.to_string()),
            status_list: resp.status_list,
            nameservers: resp.nameservers.into_iter().map(|ns| ns.name).collect(),
            auto_renew: resp.auto_renew,
            admin_contact: resp.admin_contact.map(Into::into),
            registrant_contact: resp.registrant_contact.map(Into::into),
            tech_contact: resp.tech_contact.map(Into::into),
            privacy,
            registrar_name: resp.registrar_name,
            creation_date: resp.creation_date.and_then(parse_epoch_seconds),
            updated_date: resp.updated_date.and_then(parse_epoch_seconds),
            expiration_date: resp.expiration_date.and_then(parse_epoch_seconds),
        }
    }
}

#[async_trait]
impl RegistryClient for Route53DomainsProvider {
    fn id(&self) -> &'static str {
        "route53domains"
    }

    async fn register_domain(&self, request: &RegistrationRequest) -> Result<OperationHandle> {
        request.validate(self.provider_name())?;
        let domain = normalize_domain_name(&request.domain_name);

        let body = RegisterDomainRequest {
            domain_name: domain.clone(),
            duration_in_years: request.duration_years,
            auto_renew: request.auto_renew,
            admin_contact: Contact::from(&request.contacts.admin),
            registrant_contact: Contact::from(&request.contacts.registrant),
            tech_contact: Contact::from(&request.contacts.tech),
            privacy_protect_admin_contact: request.privacy.admin,
            privacy_protect_registrant_contact: request.privacy.registrant,
            privacy_protect_tech_contact: request.privacy.tech,
        };

        let resp: OperationIdResponse = self
            .call("RegisterDomain", &body, ErrorContext::for_domain(&domain))
            .await?;
        let handle = self.require_operation("RegisterDomain", resp)?;
        log::info!("[{}] Registration of {domain} submitted: {handle}", self.id());
        Ok(handle)
    }

    async fn get_operation_detail(&self, handle: &OperationHandle) -> Result<OperationDetail> {
        let body = OperationIdRequest {
            operation_id: handle.as_str(),
        };
        let resp: GetOperationDetailResponse = self
            .call("GetOperationDetail", &body, ErrorContext::for_operation(handle))
            .await?;

        let status = self.convert_operation_status(resp.status.as_deref())?;
        log::debug!("[{}] Operation {handle} status: {status}", self.id());

        Ok(OperationDetail {
            handle: resp
                .operation_id
                .map_or_else(|| handle.clone(), OperationHandle::new),
            status,
            message: resp.message.filter(|m| !m.is_empty()),
            domain_name: resp.domain_name,
            submitted_at: resp.submitted_date.and_then(parse_epoch_seconds),
        })
    }

    async fn update_nameservers(
        &self,
        domain_name: &str,
        nameservers: &[String],
    ) -> Result<OperationHandle> {
        if nameservers.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "nameservers".to_string(),
                detail: "at least one nameserver is required".to_string(),
            });
        }

        let domain = normalize_domain_name(domain_name);
        let body = UpdateDomainNameserversRequest {
            domain_name: &domain,
            nameservers: nameservers
                .iter()
                .map(|name| Nameserver {
                    name: name.clone(),
                    glue_ips: Vec::new(),
                })
                .collect(),
        };
        let resp: OperationIdResponse = self
            .call("UpdateDomainNameservers", &body, ErrorContext::for_domain(&domain))
            .await?;
        self.require_operation("UpdateDomainNameservers", resp)
    }

    async fn get_domain_detail(&self, domain_name: &str) -> Result<DomainRecord> {
        let domain = normalize_domain_name(domain_name);
        let resp: GetDomainDetailResponse = self
            .call(
                "GetDomainDetail",
                &DomainNameRequest {
                    domain_name: &domain,
                },
                ErrorContext::for_domain(&domain),
            )
            .await?;
        Ok(Self::convert_domain_detail(&domain, resp))
    }

    async fn renew_domain(
        &self,
        domain_name: &str,
        duration_years: u8,
        current_expiry_year: i32,
    ) -> Result<OperationHandle> {
        let domain = normalize_domain_name(domain_name);
        let body = RenewDomainRequest {
            domain_name: &domain,
            duration_in_years: duration_years,
            current_expiry_year,
        };
        let resp: OperationIdResponse = self
            .call("RenewDomain", &body, ErrorContext::for_domain(&domain))
            .await?;
        self.require_operation("RenewDomain", resp)
    }

    async fn enable_auto_renew(&self, domain_name: &str) -> Result<()> {
        let domain = normalize_domain_name(domain_name);
        let _: EmptyResponse = self
            .call(
                "EnableDomainAutoRenew",
                &DomainNameRequest {
                    domain_name: &domain,
                },
                ErrorContext::for_domain(&domain),
            )
            .await?;
        Ok(())
    }

    async fn disable_auto_renew(&self, domain_name: &str) -> Result<()> {
        let domain = normalize_domain_name(domain_name);
        let _: EmptyResponse = self
            .call(
                "DisableDomainAutoRenew",
                &DomainNameRequest {
                    domain_name: &domain,
                },
                ErrorContext::for_domain(&domain),
            )
            .await?;
        Ok(())
    }

    async fn update_contacts(
        &self,
        domain_name: &str,
        contacts: &DomainContacts,
    ) -> Result<OperationHandle> {
        let domain = normalize_domain_name(domain_name);
        let body = UpdateDomainContactRequest {
            domain_name: &domain,
            admin_contact: Contact::from(&contacts.admin),
            registrant_contact: Contact::from(&contacts.registrant),
            tech_contact: Contact::from(&contacts.tech),
        };
        let resp: OperationIdResponse = self
            .call("UpdateDomainContact", &body, ErrorContext::for_domain(&domain))
            .await?;
        self.require_operation("UpdateDomainContact", resp)
    }

    async fn update_contact_privacy(
        &self,
        domain_name: &str,
        privacy: &ContactPrivacy,
    ) -> Result<OperationHandle> {
        let domain = normalize_domain_name(domain_name);
        let body = UpdateDomainContactPrivacyRequest {
            domain_name: &domain,
            admin_privacy: privacy.admin,
            registrant_privacy: privacy.registrant,
            tech_privacy: privacy.tech,
        };
        let resp: OperationIdResponse = self
            .call(
                "UpdateDomainContactPrivacy",
                &body,
                ErrorContext::for_domain(&domain),
            )
            .await?;
        self.require_operation("UpdateDomainContactPrivacy", resp)
    }

    async fn delete_domain(&self, domain_name: &str) -> Result<OperationHandle> {
        let domain = normalize_domain_name(domain_name);
        let resp: OperationIdResponse = self
            .call(
                "DeleteDomain",
                &DomainNameRequest {
                    domain_name: &domain,
                },
                ErrorContext::for_domain(&domain),
            )
            .await?;
        let handle = self.require_operation("DeleteDomain", resp)?;
        log::info!("[{}] Deletion of {domain} submitted: {handle}", self.id());
        Ok(handle)
    }

    async fn check_availability(&self, domain_name: &str) -> Result<DomainAvailability> {
        let domain = normalize_domain_name(domain_name);
        let resp: CheckDomainAvailabilityResponse = self
            .call(
                "CheckDomainAvailability",
                &DomainNameRequest {
                    domain_name: &domain,
                },
                ErrorContext::for_domain(&domain),
            )
            .await?;
        self.convert_availability(resp.availability)
    }

    async fn list_prices(&self, tld: Option<&str>, marker: Option<&str>) -> Result<PricePage> {
        let tld = tld.map(|t| t.trim_start_matches('.'));
        let body = ListPricesRequest {
            tld,
            marker,
            max_items: MAX_PRICE_PAGE_SIZE,
        };
        let resp: ListPricesResponse = self
            .call("ListPrices", &body, ErrorContext::default())
            .await?;

        let convert = |p: Option<super::types::PriceWithCurrency>| {
            p.map(|p| PriceWithCurrency {
                price: p.price,
                currency: p.currency,
            })
        };

        Ok(PricePage {
            prices: resp
                .prices
                .into_iter()
                .map(|p| DomainPrice {
                    tld: p.name,
                    registration: convert(p.registration_price),
                    renewal: convert(p.renewal_price),
                    transfer: convert(p.transfer_price),
                    change_ownership: convert(p.change_ownership_price),
                    restoration: convert(p.restoration_price),
                })
                .collect(),
            next_marker: resp.next_page_marker.filter(|m| !m.is_empty()),
        })
    }
}
