//! 1 回の起動全体を包むユースケース
//!
//! 一覧処理のどこで失敗しても、ここで 1 件のエラー項目に変換して応答する。
//! 応答チャネル（stdout）には常に整形式の文書が 1 つだけ出る。

use std::sync::Arc;
use std::time::Instant;

use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};

use crate::domain::{render_document, FeedbackItem};
use crate::ports::outbound::FeedbackSink;
use crate::usecase::ListProfilesUseCase;

/// ワークフロー名が環境から取れないときの表示名
pub const DEFAULT_WORKFLOW_NAME: &str = "openprofile";

pub struct WorkflowUseCase {
    list_profiles: ListProfilesUseCase,
    sink: Arc<dyn FeedbackSink>,
    env: Arc<dyn EnvResolver>,
    log: Arc<dyn Log>,
}

impl WorkflowUseCase {
    pub fn new(
        list_profiles: ListProfilesUseCase,
        sink: Arc<dyn FeedbackSink>,
        env: Arc<dyn EnvResolver>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            list_profiles,
            sink,
            env,
            log,
        }
    }

    /// クエリ（または引数解析の失敗）を受けて応答を 1 回送る
    ///
    /// Err を返すのは応答自体を書き出せなかったときだけ。
    pub fn run(&self, query: Result<String, Error>) -> Result<(), Error> {
        let start = Instant::now();

        let items = match query.and_then(|q| self.list_profiles.run(&q)) {
            Ok(items) => items,
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .layer("usecase")
                        .kind("error"),
                );
                vec![FeedbackItem::error(&self.workflow_name(), &e)]
            }
        };

        let result = self.sink.send(&render_document(&items));

        let _ = self.log.log(
            &LogRecord::new(
                LogLevel::Debug,
                format!(
                    "Workflow finished in {:.3} seconds.",
                    start.elapsed().as_secs_f64()
                ),
            )
            .layer("usecase")
            .kind("perf"),
        );
        result
    }

    /// エラー項目のタイトルに出す名前（名前 → バンドル ID → 既定値）
    fn workflow_name(&self) -> String {
        self.env
            .workflow_name()
            .or_else(|| self.env.workflow_bundle_id())
            .unwrap_or_else(|| DEFAULT_WORKFLOW_NAME.to_string())
    }
}
