//! # ヘルスチェックハンドラ
//!
//! 稼働確認のみ。依存するデータストアを持たないため Readiness Check はない。

use axum::Json;
use netus_shared::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
