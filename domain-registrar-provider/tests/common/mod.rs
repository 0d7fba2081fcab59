//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use domain_registrar_provider::{ProviderCredentials, RegistryClient, create_registry_client};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成一个几乎不可能已被注册的域名（仅用于可用性查询）
pub fn generate_unregistered_domain() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("registrar-test-{}.com", &uuid[..12])
}

/// 测试上下文 - 封装 Client 和账户内已注册的测试域名
pub struct TestContext {
    pub client: Arc<dyn RegistryClient>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Route 53 Domains 测试上下文
    pub fn route53domains() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let session_token = env::var("AWS_SESSION_TOKEN").ok();
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = ProviderCredentials::Route53Domains {
            access_key_id,
            secret_access_key,
            session_token,
            region: None,
        };
        let client = create_registry_client(credentials).ok()?;

        Some(Self { client, domain })
    }
}
