//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// メール送信バックエンドの種別
///
/// 環境変数 `MAILER_BACKEND` で切り替える。
/// 値が未設定または不正な場合は [`Smtp`](MailerBackend::Smtp) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MailerBackend {
    /// lettre による SMTP リレー送信（本番）
    #[default]
    Smtp,
    /// 送信せずログ出力のみ（開発・検証用）
    Noop,
}

impl MailerBackend {
    /// 文字列からバックエンド種別をパースする
    ///
    /// 不正な値の場合は [`Smtp`](MailerBackend::Smtp) にフォールバックし、
    /// stderr に警告を出力する。
    pub fn parse(s: &str) -> Self {
        match s {
            "smtp" => Self::Smtp,
            "noop" => Self::Noop,
            other => {
                eprintln!("WARNING: unknown MAILER_BACKEND={other:?}, falling back to smtp");
                Self::Smtp
            }
        }
    }
}

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// SMTP リレーのホスト名
    pub smtp_host: String,
    /// SMTP リレーのポート番号（implicit TLS）
    pub smtp_port: u16,
    /// システムメールアカウントのアドレス
    ///
    /// SMTP 認証ユーザー名・管理者通知の宛先・両メールの送信元を兼ねる。
    pub email_user: String,
    /// SMTP 認証パスワード
    pub email_pass: String,
    /// メール送信バックエンド
    pub mailer_backend: MailerBackend,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .expect("API_PORT が設定されていません")
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.zoho.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .map(|v| {
                    v.parse()
                        .expect("SMTP_PORT は有効なポート番号である必要があります")
                })
                .unwrap_or(465),
            email_user: env::var("EMAIL_USER").expect("EMAIL_USER が設定されていません"),
            email_pass: env::var("EMAIL_PASS").expect("EMAIL_PASS が設定されていません"),
            mailer_backend: env::var("MAILER_BACKEND")
                .map(|v| MailerBackend::parse(&v))
                .unwrap_or_default(),
        })
    }
}
