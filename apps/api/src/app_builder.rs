//! # アプリケーション構築
//!
//! DI（Mailer / MxResolver / State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{get, post},
};
use netus_infra::{mailer::Mailer, mx::MxResolver};
use netus_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{ContactState, health_check, method_not_allowed, preflight, submit_contact},
    usecase::ContactNotifier,
};

/// CORS で許可するリクエストヘッダー（フロントエンドとの既存契約）
const ALLOWED_HEADERS: [&str; 9] = [
    "x-csrf-token",
    "x-requested-with",
    "accept",
    "accept-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "x-api-version",
];

/// CORS で許可するメソッド（フロントエンドとの既存契約）
const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::DELETE,
    Method::POST,
    Method::PUT,
];

/// DI コンテナの構築とルーター定義を行う
///
/// インフラ初期化済みの依存を受け取り、Notifier → State → Router の
/// 順に組み立てる。Mailer / MxResolver はトレイトオブジェクトで受け取り、
/// テストではモックに差し替えられる。
pub fn build_app(
    mailer: Arc<dyn Mailer>,
    mx_resolver: Arc<dyn MxResolver>,
    sender_address: String,
) -> anyhow::Result<Router> {
    let notifier = Arc::new(ContactNotifier::new(mailer, sender_address)?);

    let state = Arc::new(ContactState {
        mx_resolver,
        notifier,
    });

    // 任意オリジンに資格情報付きで応答する。ワイルドカード + credentials の
    // 組み合わせは CORS 仕様違反のため、リクエストの Origin をそのまま返す
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static));

    // ルーター構築
    // レイヤー順序が重要: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
    // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. CorsLayer: プリフライト応答と全レスポンスへの CORS ヘッダー付与
    Ok(Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/contact",
            post(submit_contact)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7)))
}
