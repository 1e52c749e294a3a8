//! # コンタクトフォーム送信
//!
//! フォームから受け取る送信データと、送信元ドメインの抽出・検証に
//! 関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | 意味 |
//! |---|------|
//! | [`ContactSubmission`] | 1 回のフォーム送信。リクエスト寿命を超えて保持されない |
//! | [`MxLookupError`] | 送信元ドメインの MX 検証失敗 |
//!
//! ## 設計方針
//!
//! - 全フィールドは欠落時に空文字へフォールバックする。欠落した
//!   メールアドレスは不正形式と同じ「ドメインなし」として扱われ、
//!   呼び出し側で単一の検証エラーに合流する（既存のフロントエンド契約）
//! - ドメイン抽出は最初の `@` の直後のセグメントを取る

use serde::Deserialize;
use thiserror::Error;

/// コンタクトフォームからの 1 回の送信
///
/// JSON ボディ（camelCase）からデシリアライズされる。永続化されず、
/// リクエスト処理の完了とともに破棄される。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// 名
    #[serde(default)]
    pub first_name: String,
    /// 姓
    #[serde(default)]
    pub surname:    String,
    /// 送信者のメールアドレス
    #[serde(default)]
    pub email:      String,
    /// 本文
    #[serde(default)]
    pub message:    String,
}

impl ContactSubmission {
    /// メールアドレスからドメイン部分を抽出する
    ///
    /// 最初の `@` と次の `@`（または末尾）の間のセグメントを返す。
    /// `@` がない、またはセグメントが空の場合は `None`。
    pub fn email_domain(&self) -> Option<&str> {
        self.email.split('@').nth(1).filter(|d| !d.is_empty())
    }

    /// 名と姓を空白区切りで連結したフルネーム
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

/// 送信元ドメインの MX 検証エラー
///
/// ハンドラはすべてのバリアントを同一の 400 レスポンスに合流させる。
/// バリアントの区別はログ上の調査のためにのみ存在する。
#[derive(Debug, Error)]
pub enum MxLookupError {
    /// ドメインは解決できたが MX レコードが 1 件もない
    #[error("MX レコードが存在しない: {0}")]
    NoRecords(String),

    /// DNS 解決自体に失敗（NXDOMAIN、タイムアウト等）
    #[error("DNS 解決に失敗: {0}")]
    Resolution(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn make_submission(email: &str) -> ContactSubmission {
        ContactSubmission {
            first_name: "Taro".to_string(),
            surname:    "Yamada".to_string(),
            email:      email.to_string(),
            message:    "hello".to_string(),
        }
    }

    #[rstest]
    #[case("user@gmail.com", Some("gmail.com"))]
    #[case("user@sub.example.co.jp", Some("sub.example.co.jp"))]
    // 先頭 @ でもセグメントがあれば抽出する（検証は MX 照会に委ねる）
    #[case("@example.com", Some("example.com"))]
    // 2 つ目の @ 以降は含めない
    #[case("a@b@c", Some("b"))]
    #[case("no-at-sign", None)]
    #[case("user@", None)]
    #[case("", None)]
    fn email_domainがドメイン部分を抽出する(
        #[case] email: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(make_submission(email).email_domain(), expected);
    }

    #[test]
    fn full_nameが名と姓を連結する() {
        assert_eq!(make_submission("a@b.com").full_name(), "Taro Yamada");
    }

    #[test]
    fn 全フィールドを含むjsonをデシリアライズできる() {
        let json = r#"{
            "firstName": "Taro",
            "surname": "Yamada",
            "email": "taro@example.com",
            "message": "hello there"
        }"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();

        assert_eq!(submission.first_name, "Taro");
        assert_eq!(submission.surname, "Yamada");
        assert_eq!(submission.email, "taro@example.com");
        assert_eq!(submission.message, "hello there");
    }

    #[test]
    fn 欠落フィールドは空文字にフォールバックする() {
        let json = r#"{ "firstName": "Taro" }"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();

        assert_eq!(submission.first_name, "Taro");
        assert_eq!(submission.surname, "");
        assert_eq!(submission.email, "");
        assert_eq!(submission.message, "");
        // 欠落メールアドレスはドメインなし扱い
        assert_eq!(submission.email_domain(), None);
    }

    #[test]
    fn mx_lookup_errorのメッセージにドメインが含まれる() {
        let err = MxLookupError::NoRecords("example.invalid".to_string());
        assert!(err.to_string().contains("example.invalid"));
    }
}
