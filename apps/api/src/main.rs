//! # Netus Contact API サーバー
//!
//! コンタクトフォーム送信を受け付ける単一エンドポイントのバックエンド。
//!
//! ## 役割
//!
//! - 送信元メールドメインの MX 検証
//! - 検証成功の時点で即時応答（メール送信の完了を待たない）
//! - 管理者通知と自動返信のバックグラウンド送信（fire-and-forget）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `EMAIL_USER` | **Yes** | システムメールアカウントのアドレス |
//! | `EMAIL_PASS` | **Yes** | SMTP 認証パスワード |
//! | `SMTP_HOST` | No | SMTP リレーのホスト名（デフォルト: `smtp.zoho.com`） |
//! | `SMTP_PORT` | No | SMTP リレーのポート番号（デフォルト: `465`） |
//! | `MAILER_BACKEND` | No | `smtp`（デフォルト）または `noop` |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p netus-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=3000 EMAIL_USER=... EMAIL_PASS=... cargo run -p netus-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use netus_api::{
    app_builder::build_app,
    config::{ApiConfig, MailerBackend},
};
use netus_infra::{
    mailer::{Mailer, NoopMailer, SmtpMailer},
    mx::HickoryMxResolver,
};
use netus_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Contact API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. メール送信基盤と DNS リゾルバの初期化
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Contact API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // メール送信基盤の初期化
    // SMTP トランスポートはプロセスで 1 つだけ構築し、全リクエストで
    // 共有する（接続の再利用は lettre のプールが管理する）
    let mailer: Arc<dyn Mailer> = match config.mailer_backend {
        MailerBackend::Smtp => Arc::new(
            SmtpMailer::new(
                &config.smtp_host,
                config.smtp_port,
                config.email_user.clone(),
                config.email_pass.clone(),
            )
            .expect("SMTP トランスポートの構築に失敗しました"),
        ),
        MailerBackend::Noop => {
            tracing::warn!("MAILER_BACKEND=noop: メールは実際には送信されません");
            Arc::new(NoopMailer)
        }
    };

    // DNS リゾルバの初期化（内部キャッシュを持つためプロセスで 1 つ）
    let mx_resolver = Arc::new(HickoryMxResolver::new());

    // ルーター構築
    let app = build_app(mailer, mx_resolver, config.email_user.clone())?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Contact API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
