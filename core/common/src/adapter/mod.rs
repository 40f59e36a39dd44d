//! アダプター（Outbound ポートの標準実装）
//!
//! 実装は標準実装（Std*）を wiring で注入し、テストではモックを注入する。

pub mod composite_log;
pub mod file_json_log;
pub mod stderr_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_process;

pub use composite_log::CompositeLog;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use stderr_log::StderrLog;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
