//! # API レスポンス型
//!
//! コンタクトエンドポイントの固定レスポンス形式とヘルパーを集約する。
//!
//! レスポンスボディはフロントエンドとの既存契約であり、
//! ステータスコード・フィールド名・文言を変えないこと。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// 検証失敗時の `error` フィールド値（既存契約の固定文言）
pub const INVALID_EMAIL_ERROR: &str = "INVALID EMAIL ADDRESS";

/// 未対応メソッド時の `error` フィールド値
pub const METHOD_NOT_ALLOWED_ERROR: &str = "Method not allowed";

/// 受理レスポンス `{"success": true}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAccepted {
    pub success: bool,
}

/// 検証失敗レスポンス `{"success": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRejected {
    pub success: bool,
    pub error:   String,
}

/// メソッドエラーレスポンス `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNotAllowedBody {
    pub error: String,
}

/// 200 受理レスポンス
///
/// MX 検証成功の時点で返す。メール送信の結果はこのレスポンスに
/// 一切反映されない。
pub fn accepted_response() -> Response {
    (StatusCode::OK, Json(SubmitAccepted { success: true })).into_response()
}

/// 400 検証失敗レスポンス
///
/// ドメイン抽出失敗・MX 解決失敗のどちらもこのレスポンスに合流する。
pub fn invalid_email_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(SubmitRejected {
            success: false,
            error:   INVALID_EMAIL_ERROR.to_string(),
        }),
    )
        .into_response()
}

/// 405 メソッドエラーレスポンス
pub fn method_not_allowed_response() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedBody {
            error: METHOD_NOT_ALLOWED_ERROR.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn response_status_and_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn accepted_responseが200とsuccess_trueを返す() {
        let (status, json) = response_status_and_json(accepted_response()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[tokio::test]
    async fn invalid_email_responseが400と固定文言を返す() {
        let (status, json) = response_status_and_json(invalid_email_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "INVALID EMAIL ADDRESS" })
        );
    }

    #[tokio::test]
    async fn method_not_allowed_responseが405と固定文言を返す() {
        let (status, json) = response_status_and_json(method_not_allowed_response()).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }
}
