//! 設定ダンプの用意（Outbound ポート）

use common::error::Error;
use std::path::PathBuf;

/// 読み出し可能になったテキストダンプ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDump {
    pub path: PathBuf,
    /// 既存のキャッシュをそのまま使ったか
    pub cache_hit: bool,
}

/// 設定ファイルをテキストダンプに変換して置き場所を返す
///
/// 実装は `PlutilDumpSource`（plutil -p）やテスト用の固定ダンプなど。
pub trait DumpSource: Send + Sync {
    /// 変換元が無ければ `Error::SourceMissing`
    fn stage(&self) -> Result<StagedDump, Error>;
}
