//! Provider 公共工具函数

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// Falls back to reqwest's default client if the TLS backend cannot be
/// initialised with the custom timeouts.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build HTTP client with timeouts, using defaults: {e}");
            Client::new()
        })
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（SigV4 签名密钥派生使用）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length; the error arm is unreachable
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点并转为小写
/// 如: "Example.COM." -> "example.com"
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// 转换为 DNS 绝对名称（末尾带点）
/// 如: "example.com" -> "example.com."
pub fn to_dns_name(name: &str) -> String {
    format!("{}.", normalize_domain_name(name))
}

/// 两个域名是否指向同一名称（忽略大小写与末尾的点）
pub fn same_domain_name(a: &str, b: &str) -> bool {
    normalize_domain_name(a) == normalize_domain_name(b)
}
