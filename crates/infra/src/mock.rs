//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! netus-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use netus_domain::{
    contact::MxLookupError,
    email::{MailError, OutboundEmail},
};

use crate::{mailer::Mailer, mx::MxResolver};

// ===== MockMailer =====

/// テスト用のモック Mailer
///
/// 送信試行をインメモリに記録する。`fail_for` で指定した宛先への
/// 送信は失敗させられる（片方だけ失敗するシナリオの再現用）。
#[derive(Clone, Default)]
pub struct MockMailer {
    sent:     Arc<Mutex<Vec<OutboundEmail>>>,
    fail_for: Arc<Mutex<Vec<String>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させる
    pub fn fail_for(&self, to: impl Into<String>) {
        self.fail_for.lock().unwrap().push(to.into());
    }

    /// 送信が試行されたメールの一覧（失敗した試行も含む）
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail_for.lock().unwrap().contains(&email.to) {
            return Err(MailError::SendFailed(format!(
                "モック送信失敗: {}",
                email.to
            )));
        }
        Ok(())
    }
}

// ===== MockMxResolver =====

/// テスト用のモック MxResolver
///
/// `new()` は常に解決成功、`unresolvable()` は常に失敗を返す。
/// 照会されたドメインを記録するため、ドメイン抽出の検証にも使える。
#[derive(Clone, Default)]
pub struct MockMxResolver {
    unresolvable: bool,
    queried:      Arc<Mutex<Vec<String>>>,
}

impl MockMxResolver {
    /// 常に解決成功するリゾルバ
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に解決失敗するリゾルバ
    pub fn unresolvable() -> Self {
        Self {
            unresolvable: true,
            ..Self::default()
        }
    }

    /// 照会されたドメインの一覧
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl MxResolver for MockMxResolver {
    async fn resolve_mx(&self, domain: &str) -> Result<(), MxLookupError> {
        self.queried.lock().unwrap().push(domain.to_string());

        if self.unresolvable {
            return Err(MxLookupError::NoRecords(domain.to_string()));
        }
        Ok(())
    }
}
