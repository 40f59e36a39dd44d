//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// 1 回の起動を実行する Inbound ポート
///
/// 引数解析の失敗もそのまま渡し、応答文書の中で報告させる。
/// Err は応答を書き出せなかった場合のみ。
pub trait UseCaseRunner {
    fn run(&self, parsed: Result<Config, Error>) -> Result<(), Error>;
}
