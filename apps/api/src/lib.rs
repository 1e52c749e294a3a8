//! # Netus Contact API ライブラリ
//!
//! コンタクトフォーム送信エンドポイントのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI（Mailer / MxResolver / State）とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: 固定レスポンス型とヘルパー
//! - `handler`: HTTP ハンドラ
//! - `usecase`: 通知ディスパッチとテンプレートレンダリング

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
