//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリとランチャー（Alfred）が渡す `alfred_*` 変数を解決する。
//! usecase / adapter はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリ（HOME）。未設定ならエラー
    fn home_dir(&self) -> Result<PathBuf, Error>;

    /// ランチャーのデバッガが開いているか（alfred_debug=1）
    fn debugging(&self) -> bool;

    /// ワークフロー名（alfred_workflow_name）
    fn workflow_name(&self) -> Option<String>;

    /// バンドル ID（alfred_workflow_bundleid）
    fn workflow_bundle_id(&self) -> Option<String>;

    /// ワークフローのキャッシュディレクトリ（alfred_workflow_cache）
    fn workflow_cache_dir(&self) -> Option<PathBuf>;
}
