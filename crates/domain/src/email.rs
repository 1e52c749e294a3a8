//! # 送信メールモデル
//!
//! メール送信基盤に渡す値オブジェクトとエラー型を定義する。
//!
//! ## 設計方針
//!
//! - [`OutboundEmail`] は構築後に変更されない。1 インスタンスにつき
//!   配送試行はちょうど 1 回（リトライなし）
//! - アドレスは文字列のまま保持し、パースはトランスポート実装の責務

use thiserror::Error;

/// メール本文
///
/// 管理者通知はプレーンテキスト、自動返信は HTML の単一パートで送る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBody {
    /// プレーンテキスト本文
    Text(String),
    /// HTML 本文
    Html(String),
}

/// 送信メール
///
/// 1 回の配送試行の入力。[`crate::contact::ContactSubmission`] 1 件につき
/// 管理者通知と自動返信の 2 インスタンスが構築される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// 送信元（表示名付きも可: `"Netus" <contact@example.com>`）
    pub from:    String,
    /// 宛先メールアドレス
    pub to:      String,
    /// 件名
    pub subject: String,
    /// 本文
    pub body:    MailBody,
}

/// メール送信エラー
#[derive(Debug, Error)]
pub enum MailError {
    /// メール送信に失敗（アドレス不正・トランスポート障害を含む）
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}
