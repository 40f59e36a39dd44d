//! openprofile 共通ライブラリ
//!
//! エラー型と、外界（ファイル・サブプロセス・環境変数・ログ）に触れるための
//! Outbound ポートおよびその標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
