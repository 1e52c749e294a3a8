//! Noop メール送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! SMTP 資格情報のない開発環境や検証時に使用する。

use async_trait::async_trait;
use netus_domain::email::{MailError, OutboundEmail};

use super::Mailer;

/// Noop メール送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
