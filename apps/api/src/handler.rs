//! # HTTP ハンドラ
//!
//! - `contact`: コンタクトフォーム送信
//! - `health`: ヘルスチェック

mod contact;
mod health;

pub use contact::{ContactState, method_not_allowed, preflight, submit_contact};
pub use health::health_check;
