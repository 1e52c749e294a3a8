//! SMTP メール送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! リレー（implicit TLS、既定ポート 465）に認証付きで接続する。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use netus_domain::email::{MailBody, MailError, OutboundEmail};

use super::Mailer;

/// SMTP メール送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// トランスポートは接続プールを内蔵しており、複数の送信で
/// セッションが再利用される。
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP リレーのホスト名（例: "smtp.zoho.com"）
    /// - `port`: SMTP リレーのポート番号（implicit TLS、例: 465）
    /// - `username`: SMTP 認証ユーザー名（メールアドレス）
    /// - `password`: SMTP 認証パスワード
    pub fn new(
        host: &str,
        port: u16,
        username: String,
        password: String,
    ) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::SendFailed(format!("SMTP トランスポート構築失敗: {e}")))?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self { transport })
    }

    /// `OutboundEmail` から lettre の `Message` を構築する
    fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
        let builder = Message::builder()
            .from(
                email
                    .from
                    .parse()
                    .map_err(|e| MailError::SendFailed(format!("送信元アドレス不正: {e}")))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| MailError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject);

        let message = match &email.body {
            MailBody::Text(text) => builder
                .header(ContentType::TEXT_PLAIN)
                .body(text.clone()),
            MailBody::Html(html) => builder
                .header(ContentType::TEXT_HTML)
                .body(html.clone()),
        }
        .map_err(|e| MailError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = Self::build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
