//! # Netus インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層のエラー型に対するトレイト実装を提供する。
//! 外部システムの詳細をカプセル化し、ハンドラをインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **メール送信**: SMTP リレー（lettre）経由の配送
//! - **MX 検証**: 送信元ドメインの DNS 照会（hickory-resolver）
//! - **テストダブル**: `test-utils` feature 有効時のインメモリモック
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`mailer`] - メール送信トレイトと SMTP / Noop 実装
//! - [`mx`] - MX レコード検証トレイトと hickory-resolver 実装
//! - [`mock`] - テスト用モック（`test-utils` feature）

pub mod mailer;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod mx;

pub use mailer::{Mailer, NoopMailer, SmtpMailer};
pub use mx::{HickoryMxResolver, MxResolver};
