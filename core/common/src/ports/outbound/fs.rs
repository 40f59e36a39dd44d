//! ファイルシステム Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::io::BufRead;
use std::path::Path;
use std::time::SystemTime;

/// ファイルメタデータ（キャッシュの鮮度判定に使う更新時刻のみ）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    modified: Option<SystemTime>,
}

impl FileMetadata {
    pub fn new(modified: Option<SystemTime>) -> Self {
        Self { modified }
    }

    /// 更新時刻（取得できないプラットフォームでは None）
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    /// 読み込み用に開く。返した Reader を drop すると閉じる。
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead + Send>, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn copy(&self, from: &Path, to: &Path) -> Result<(), Error>;
    /// 置き換え先が既にあれば原子的に上書きする
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
