//! # Netus ドメイン層
//!
//! コンタクトフォーム送信に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - このクレートはインフラの詳細（axum / lettre / DNS）に依存しない
//! - エラー型はここで定義し、インフラ層が実装時にマッピングする
//!   （依存性逆転の原則）
//! - 送信物（[`email::OutboundEmail`]）は構築後に変更されない値オブジェクト
//!
//! ## モジュール構成
//!
//! - [`contact`] - コンタクトフォーム送信とドメイン検証
//! - [`email`] - 送信メールモデル

pub mod contact;
pub mod email;
