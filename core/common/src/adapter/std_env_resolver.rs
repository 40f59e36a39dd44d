//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 空文字は未設定として扱う
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn home_dir(&self) -> Result<PathBuf, Error> {
        non_empty_var("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| Error::env("HOME is not set"))
    }

    fn debugging(&self) -> bool {
        non_empty_var("alfred_debug").as_deref() == Some("1")
    }

    fn workflow_name(&self) -> Option<String> {
        non_empty_var("alfred_workflow_name")
    }

    fn workflow_bundle_id(&self) -> Option<String> {
        non_empty_var("alfred_workflow_bundleid")
    }

    fn workflow_cache_dir(&self) -> Option<PathBuf> {
        non_empty_var("alfred_workflow_cache").map(PathBuf::from)
    }
}
