//! # メール送信
//!
//! メール配送を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`Mailer`] trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（本番）、Noop（開発・検証用）
//! - **環境変数切替**: `MAILER_BACKEND` でランタイム選択
//!
//! トランスポートはプロセス起動時に 1 つ構築され、全リクエストで
//! 共有される。接続の再利用（プーリング）はトランスポート実装側の
//! 責務であり、呼び出し側は各送信を独立した操作として扱う。

mod noop;
mod smtp;

use async_trait::async_trait;
use netus_domain::email::{MailError, OutboundEmail};
pub use noop::NoopMailer;
pub use smtp::SmtpMailer;

/// メール送信トレイト
///
/// 配送試行は 1 回のみ。リトライや配送保証は提供しない。
#[async_trait]
pub trait Mailer: Send + Sync {
    /// メールを送信する
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
