//! プロファイル一覧のユースケース（ダンプ用意 → パース → 絞り込み → 項目化）

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};

use crate::domain::{filter_records, parse, FeedbackItem, ProfileRecord};
use crate::ports::outbound::DumpSource;

pub struct ListProfilesUseCase {
    source: Arc<dyn DumpSource>,
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Log>,
}

impl ListProfilesUseCase {
    pub fn new(source: Arc<dyn DumpSource>, fs: Arc<dyn FileSystem>, log: Arc<dyn Log>) -> Self {
        Self { source, fs, log }
    }

    /// クエリに一致するプロファイルの項目を元の順序で返す
    pub fn run(&self, query: &str) -> Result<Vec<FeedbackItem>, Error> {
        let staged = self.source.stage()?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "dump staged")
                .layer("usecase")
                .kind("staging")
                .field("path", staged.path.display().to_string())
                .field("cache_hit", staged.cache_hit),
        );

        let records = self.read_records(&staged.path)?;
        let total = records.len();
        let kept = filter_records(records, query);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "profiles filtered")
                .layer("usecase")
                .kind("parse")
                .field("parsed", total)
                .field("kept", kept.len()),
        );

        Ok(kept.iter().map(FeedbackItem::from_record).collect())
    }

    /// ダンプ全体を読み切ってからパースする（Reader はこの関数内で閉じる）
    fn read_records(&self, path: &Path) -> Result<Vec<ProfileRecord>, Error> {
        let reader = self.fs.open_read(path)?;
        let lines = reader
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))?;
        Ok(parse(&lines))
    }
}
