//! 応答文書の送出先（Outbound ポート）

use common::error::Error;

/// 完成した応答文書を 1 回で書き出して flush する
pub trait FeedbackSink: Send + Sync {
    fn send(&self, document: &str) -> Result<(), Error>;
}
