//! サブプロセス実行 Outbound ポート
//!
//! 設定ファイルのテキスト変換（plutil）など、外部コマンド起動を trait で抽象化する。

use crate::error::Error;
use std::path::Path;

/// 終了したサブプロセスの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// 終了コード（シグナル終了などで取れない場合は 1）
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// サブプロセス実行の抽象
///
/// 実装は `common::adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// プログラムを引数付きで実行し、標準出力・標準エラーを取り込んで返す
    fn output(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, Error>;
}
