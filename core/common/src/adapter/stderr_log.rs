//! 人間向けログ（stderr へ 1 行ずつ整形して出力）
//!
//! ランチャーは stdout を応答として読むので、ここは必ず stderr に書く。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

/// しきい値以下のレベルだけを stderr に出す Log 実装
#[derive(Debug, Clone)]
pub struct StderrLog {
    threshold: LogLevel,
}

impl StderrLog {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// デバッガが開いていれば Debug、そうでなければ Info
    pub fn for_debugging(debugging: bool) -> Self {
        if debugging {
            Self::new(LogLevel::Debug)
        } else {
            Self::new(LogLevel::Info)
        }
    }

    /// 出力対象なら整形済みの 1 行を返す
    ///
    /// 形式: `HH:MM:SS <layer> <LEVEL> <message> [key=value ...]`
    pub fn format_line(&self, record: &LogRecord) -> Option<String> {
        if record.level > self.threshold {
            return None;
        }
        let time = chrono::DateTime::parse_from_rfc3339(&record.ts)
            .map(|t| t.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| record.ts.clone());
        let mut line = format!(
            "{} {} {:<8} {}",
            time,
            record.layer.as_deref().unwrap_or("openprofile"),
            record.level.as_str(),
            record.message
        );
        if let Some(fields) = &record.fields {
            for (k, v) in fields {
                match v {
                    serde_json::Value::String(s) => line.push_str(&format!(" {}={:?}", k, s)),
                    other => line.push_str(&format!(" {}={}", k, other)),
                }
            }
        }
        Some(line)
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(line) = self.format_line(record) {
            eprintln!("{}", line);
        }
        Ok(())
    }
}
