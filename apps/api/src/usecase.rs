//! # ユースケース層
//!
//! コンタクト送信に伴う通知メールの構築とディスパッチを担当する。

mod contact;

pub use contact::{ContactNotifier, DispatchHandles};
