//! 標準出力へ応答文書を書き出す FeedbackSink

use std::io::Write;

use common::error::Error;

use crate::ports::outbound::FeedbackSink;

/// ランチャーは stdout 全体を応答として読む
#[derive(Debug, Clone, Default)]
pub struct StdoutFeedbackSink;

impl FeedbackSink for StdoutFeedbackSink {
    fn send(&self, document: &str) -> Result<(), Error> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(document.as_bytes())
            .map_err(|e| Error::io_msg(format!("Failed to write feedback: {}", e)))?;
        out.flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush feedback: {}", e)))
    }
}
