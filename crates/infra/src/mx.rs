//! # MX レコード検証
//!
//! 送信元ドメインの MX レコードを DNS で照会する。
//!
//! メールボックスの実在証明ではなく、ドメインがメールを受信しうるかの
//! 妥当性チェックとして使う。タイムアウトはリゾルバの既定値に委ねる。

use async_trait::async_trait;
use hickory_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
};
use netus_domain::contact::MxLookupError;

/// MX レコード検証トレイト
///
/// ドメインに 1 件以上の MX レコードがあれば `Ok(())`。
/// 解決失敗とレコードなしはバリアントで区別されるが、呼び出し側は
/// どちらも検証失敗として扱う。
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// ドメインの MX レコードを照会する
    async fn resolve_mx(&self, domain: &str) -> Result<(), MxLookupError>;
}

/// hickory-resolver による MX 検証
///
/// リゾルバは内部にキャッシュを持つため、プロセスで 1 つ構築して
/// 全リクエストで共有する。
pub struct HickoryMxResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryMxResolver {
    /// 既定設定でリゾルバを構築する
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        }
    }
}

impl Default for HickoryMxResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MxResolver for HickoryMxResolver {
    async fn resolve_mx(&self, domain: &str) -> Result<(), MxLookupError> {
        let records = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| MxLookupError::Resolution(e.to_string()))?;

        if records.iter().next().is_none() {
            return Err(MxLookupError::NoRecords(domain.to_string()));
        }

        Ok(())
    }
}
