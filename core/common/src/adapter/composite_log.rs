//! 複数の Log へ同じレコードを配る Log 実装

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// 登録順にすべての Log へ書き出す。最初のエラーを返すが、残りへの書き出しは続ける。
pub struct CompositeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;
    use std::sync::Mutex;

    struct RecordingLog {
        messages: Mutex<Vec<String>>,
    }

    impl Log for RecordingLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.messages.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailingLog;

    impl Log for FailingLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    #[test]
    fn test_fans_out_even_after_failure() {
        let recording = Arc::new(RecordingLog {
            messages: Mutex::new(Vec::new()),
        });
        let log = CompositeLog::new(vec![
            Arc::new(FailingLog) as Arc<dyn Log>,
            Arc::clone(&recording) as Arc<dyn Log>,
        ]);
        let result = log.log(&LogRecord::new(LogLevel::Info, "hello"));
        assert_eq!(result, Err(Error::io_msg("disk full")));
        assert_eq!(*recording.messages.lock().unwrap(), vec!["hello".to_string()]);
    }
}
