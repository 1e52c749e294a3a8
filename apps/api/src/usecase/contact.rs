//! # コンタクト通知
//!
//! 検証済みの送信 1 件につき、管理者通知と自動返信の 2 通を構築して
//! 送信する。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: 2 通はそれぞれ独立タスクとして spawn される。
//!   完了順序の保証はなく、片方の失敗がもう片方に影響しない
//! - **失敗はログのみ**: レスポンスは既に確定しているため、送信失敗は
//!   `tracing::error!` を 1 件出力して終わる（リトライなし）
//! - **`include_str!` によるコンパイル時埋め込み**: 自動返信テンプレートは
//!   バイナリに埋め込まれる

use std::sync::Arc;

use netus_domain::{
    contact::ContactSubmission,
    email::{MailBody, MailError, OutboundEmail},
};
use netus_infra::mailer::Mailer;
use tera::{Context, Tera};
use tokio::task::JoinHandle;

/// 自動返信メールの件名（固定）
const AUTO_REPLY_SUBJECT: &str = "You’re in.";

/// 自動返信の送信元表示名
const AUTO_REPLY_DISPLAY_NAME: &str = "Netus";

/// HTML メールで使うフォントスタック（メールクライアント互換の定番）
const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif";

/// コンタクト通知サービス
///
/// 管理者通知（プレーンテキスト）と自動返信（HTML）の構築・送信を
/// 統合する。`dispatch()` は fire-and-forget で、送信失敗しても
/// 呼び出し側にエラーを返さない。
pub struct ContactNotifier {
    mailer:         Arc<dyn Mailer>,
    engine:         Tera,
    sender_address: String,
}

/// spawn された 2 つの送信タスクのハンドル
///
/// ハンドラはこれを破棄してよい（タスクはランタイム上で独立に完走する）。
/// テストでは [`join`](DispatchHandles::join) で完走を待てる。
pub struct DispatchHandles {
    pub admin_alert: JoinHandle<()>,
    pub auto_reply:  JoinHandle<()>,
}

impl DispatchHandles {
    /// 両タスクの完走を待つ（テスト用）
    pub async fn join(self) {
        let _ = tokio::join!(self.admin_alert, self.auto_reply);
    }
}

impl ContactNotifier {
    /// 新しい通知サービスを作成
    ///
    /// `include_str!` で埋め込んだ自動返信テンプレートを tera に登録する。
    ///
    /// # 引数
    ///
    /// - `mailer`: メール送信基盤
    /// - `sender_address`: システムメールアカウントのアドレス
    ///   （管理者通知の宛先と両メールの送信元を兼ねる）
    pub fn new(mailer: Arc<dyn Mailer>, sender_address: String) -> Result<Self, MailError> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(
                "auto_reply.html",
                include_str!("../../templates/contact/auto_reply.html"),
            )
            .map_err(|e| MailError::TemplateFailed(e.to_string()))?;

        Ok(Self {
            mailer,
            engine,
            sender_address,
        })
    }

    /// 2 通の送信タスクを投入する（fire-and-forget）
    ///
    /// 管理者通知と自動返信をそれぞれ独立タスクとして spawn する。
    /// 呼び出し側はハンドルを await せずにレスポンスを確定してよい。
    /// 投入後のキャンセル手段はない。
    pub fn dispatch(self: &Arc<Self>, submission: ContactSubmission) -> DispatchHandles {
        let admin_alert = {
            let notifier = self.clone();
            let submission = submission.clone();
            tokio::spawn(async move { notifier.send_admin_alert(&submission).await })
        };

        let auto_reply = {
            let notifier = self.clone();
            tokio::spawn(async move { notifier.send_auto_reply(&submission).await })
        };

        DispatchHandles {
            admin_alert,
            auto_reply,
        }
    }

    /// 管理者通知（システムアカウント宛のプレーンテキスト）を送信する
    async fn send_admin_alert(&self, submission: &ContactSubmission) {
        let email = self.admin_alert(submission);

        if let Err(e) = self.mailer.send(&email).await {
            tracing::error!(error = %e, to = %email.to, "管理者通知メールの送信に失敗");
        }
    }

    /// 自動返信（投稿者宛の HTML）を送信する
    async fn send_auto_reply(&self, submission: &ContactSubmission) {
        let email = match self.auto_reply(submission) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(error = %e, "自動返信テンプレートのレンダリングに失敗");
                return;
            }
        };

        if let Err(e) = self.mailer.send(&email).await {
            tracing::error!(error = %e, to = %email.to, "自動返信メールの送信に失敗");
        }
    }

    /// 管理者通知メールを構築する
    fn admin_alert(&self, submission: &ContactSubmission) -> OutboundEmail {
        OutboundEmail {
            from:    self.sender_address.clone(),
            to:      self.sender_address.clone(),
            subject: format!("New Connection: {}", submission.full_name()),
            body:    MailBody::Text(format!(
                "From: {}\nEmail: {}\nMessage: {}",
                submission.full_name(),
                submission.email,
                submission.message
            )),
        }
    }

    /// 自動返信メールを構築する
    fn auto_reply(&self, submission: &ContactSubmission) -> Result<OutboundEmail, MailError> {
        let mut context = Context::new();
        context.insert("font_stack", FONT_STACK);

        let html = self
            .engine
            .render("auto_reply.html", &context)
            .map_err(|e| MailError::TemplateFailed(e.to_string()))?;

        Ok(OutboundEmail {
            from:    format!("\"{}\" <{}>", AUTO_REPLY_DISPLAY_NAME, self.sender_address),
            to:      submission.email.clone(),
            subject: AUTO_REPLY_SUBJECT.to_string(),
            body:    MailBody::Html(html),
        })
    }
}
