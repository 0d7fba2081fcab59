//! Route 53 Domains API 请求/响应类型
//!
//! Field names follow the AWS JSON 1.1 wire format (`PascalCase`).

use serde::{Deserialize, Serialize};

use crate::types::{ContactDetail, ContactType};

// ============ 错误响应 ============

/// `{"__type": "com.amazonaws...#InvalidInput", "message": "..."}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    // 不同服务大小写不一致
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Error code without the namespace prefix.
    pub fn code(&self) -> Option<&str> {
        self.error_type
            .as_deref()
            .map(|t| t.rsplit_once('#').map_or(t, |(_, code)| code))
    }
}

// ============ 联系人 ============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&ContactDetail> for Contact {
    fn from(c: &ContactDetail) -> Self {
        Self {
            first_name: Some(c.first_name.clone()),
            last_name: Some(c.last_name.clone()),
            contact_type: Some(c.contact_type.as_str().to_string()),
            organization_name: c.organization_name.clone(),
            address_line1: Some(c.address_line_1.clone()),
            address_line2: c.address_line_2.clone(),
            city: Some(c.city.clone()),
            state: Some(c.state.clone()),
            country_code: Some(c.country_code.clone()),
            zip_code: Some(c.zip_code.clone()),
            phone_number: Some(c.phone_number.clone()),
            email: Some(c.email.clone()),
        }
    }
}

impl From<Contact> for ContactDetail {
    fn from(c: Contact) -> Self {
        Self {
            first_name: c.first_name.unwrap_or_default(),
            last_name: c.last_name.unwrap_or_default(),
            contact_type: c
                .contact_type
                .as_deref()
                .and_then(ContactType::parse)
                .unwrap_or_default(),
            organization_name: c.organization_name,
            email: c.email.unwrap_or_default(),
            phone_number: c.phone_number.unwrap_or_default(),
            address_line_1: c.address_line1.unwrap_or_default(),
            address_line_2: c.address_line2,
            city: c.city.unwrap_or_default(),
            state: c.state.unwrap_or_default(),
            zip_code: c.zip_code.unwrap_or_default(),
            country_code: c.country_code.unwrap_or_default(),
        }
    }
}

// ============ 请求 ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterDomainRequest {
    pub domain_name: String,
    pub duration_in_years: u8,
    pub auto_renew: bool,
    pub admin_contact: Contact,
    pub registrant_contact: Contact,
    pub tech_contact: Contact,
    pub privacy_protect_admin_contact: bool,
    pub privacy_protect_registrant_contact: bool,
    pub privacy_protect_tech_contact: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainNameRequest<'a> {
    pub domain_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationIdRequest<'a> {
    pub operation_id: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Nameserver {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glue_ips: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainNameserversRequest<'a> {
    pub domain_name: &'a str,
    pub nameservers: Vec<Nameserver>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenewDomainRequest<'a> {
    pub domain_name: &'a str,
    pub duration_in_years: u8,
    pub current_expiry_year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainContactRequest<'a> {
    pub domain_name: &'a str,
    pub admin_contact: Contact,
    pub registrant_contact: Contact,
    pub tech_contact: Contact,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainContactPrivacyRequest<'a> {
    pub domain_name: &'a str,
    pub admin_privacy: bool,
    pub registrant_privacy: bool,
    pub tech_privacy: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPricesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<&'a str>,
    pub max_items: u32,
}

// ============ 响应 ============

/// Shared shape of every action that starts an asynchronous operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationIdResponse {
    pub operation_id: Option<String>,
}

/// Actions with no meaningful output (`EnableDomainAutoRenew`, ...).
#[derive(Debug, Default, Deserialize)]
pub struct EmptyResponse {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOperationDetailResponse {
    pub operation_id: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub domain_name: Option<String>,
    pub submitted_date: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDomainDetailResponse {
    pub domain_name: Option<String>,
    #[serde(default)]
    pub nameservers: Vec<Nameserver>,
    pub auto_renew: Option<bool>,
    pub admin_contact: Option<Contact>,
    pub registrant_contact: Option<Contact>,
    pub tech_contact: Option<Contact>,
    pub admin_privacy: Option<bool>,
    pub registrant_privacy: Option<bool>,
    pub tech_privacy: Option<bool>,
    pub registrar_name: Option<String>,
    pub creation_date: Option<f64>,
    pub updated_date: Option<f64>,
    pub expiration_date: Option<f64>,
    #[serde(default)]
    pub status_list: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckDomainAvailabilityResponse {
    pub availability: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceWithCurrency {
    pub price: f64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainPrice {
    pub name: String,
    pub registration_price: Option<PriceWithCurrency>,
    pub renewal_price: Option<PriceWithCurrency>,
    pub transfer_price: Option<PriceWithCurrency>,
    pub change_ownership_price: Option<PriceWithCurrency>,
    pub restoration_price: Option<PriceWithCurrency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPricesResponse {
    #[serde(default)]
    pub prices: Vec<DomainPrice>,
    pub next_page_marker: Option<String>,
}
