//! コンタクトフォーム送信ハンドラ
//!
//! ## 処理フロー
//!
//! 1. メールアドレスからドメインを抽出
//! 2. MX レコードを照会（失敗なら 400 で終了、メール送信は行わない）
//! 3. 成功レスポンスを確定し、2 通の送信タスクをバックグラウンドに投入
//!
//! レスポンス確定後のメール送信失敗は呼び出し元に届かない（ログのみ）。

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Response,
};
use netus_domain::contact::ContactSubmission;
use netus_infra::mx::MxResolver;

use crate::{
    error::{accepted_response, invalid_email_response, method_not_allowed_response},
    usecase::ContactNotifier,
};

/// コンタクトハンドラの State
pub struct ContactState {
    pub mx_resolver: Arc<dyn MxResolver>,
    pub notifier:    Arc<ContactNotifier>,
}

/// POST /api/contact
///
/// 送信元ドメインの MX 検証に成功した時点で 200 を確定する。
/// 管理者通知と自動返信はバックグラウンドで送信され、結果は
/// レスポンスに反映されない。
///
/// ## リクエストボディ
///
/// ```json
/// {
///   "firstName": "Taro",
///   "surname": "Yamada",
///   "email": "taro@example.com",
///   "message": "hello"
/// }
/// ```
#[tracing::instrument(skip_all)]
pub async fn submit_contact(
    State(state): State<Arc<ContactState>>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    // ドメイン抽出失敗と MX 解決失敗は同じ 400 に合流させる
    // （欠落フィールドと不正形式を区別しない既存のフロントエンド契約）
    let Some(domain) = submission.email_domain() else {
        return invalid_email_response();
    };

    if let Err(e) = state.mx_resolver.resolve_mx(domain).await {
        tracing::debug!(error = %e, domain = %domain, "MX 検証失敗");
        return invalid_email_response();
    }

    // レスポンス確定のためにメール送信を待たない。spawn したタスクは
    // ランタイム上で独立に完走する（完了順序の保証・キャンセルなし）
    state.notifier.dispatch(submission);

    accepted_response()
}

/// OPTIONS /api/contact
///
/// CORS プリフライトは CorsLayer が応答するが、プリフライトヘッダーを
/// 持たない素の OPTIONS もここで 200 を返す。
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST / OPTIONS 以外のメソッドに対するフォールバック
pub async fn method_not_allowed() -> Response {
    method_not_allowed_response()
}
