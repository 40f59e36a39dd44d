//! iTerm2 の設定ファイルを `plutil -p` でテキスト化する DumpSource
//!
//! 設定ファイルを staging ディレクトリへコピーしてから変換し、結果をキャッシュする。
//! キャッシュは設定ファイルより古くなければ再利用する。
//! ランチャーは入力ごとにプロセスを起こすので、複数の実行が同時に走る。
//! コピー先と書き込み中のファイルは実行ごとに別名にし、キャッシュへは rename で差し替える。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileMetadata, FileSystem, Process};

use crate::ports::outbound::{DumpSource, StagedDump};

/// ホームディレクトリからの設定ファイルの位置
pub const PREFERENCES_PATH: &str = "Library/Preferences/com.googlecode.iterm2.plist";
/// 固定の staging ディレクトリ
pub const STAGING_DIR: &str = "/tmp";
/// 設定ファイルのコピー名の接頭辞（`<stem>.<pid>.<seq>.plist`）
pub const STAGED_PLIST_STEM: &str = "com.googlecode.iterm2";
pub const CACHED_DUMP_NAME: &str = "com.googlecode.iterm2.json";

const PLUTIL: &str = "plutil";

static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// プロセス内外で重ならない一時ファイル名の接尾辞
fn unique_suffix() -> String {
    format!(
        "{}.{}",
        std::process::id(),
        STAGING_SEQ.fetch_add(1, Ordering::Relaxed)
    )
}

/// plutil による標準 DumpSource（EnvResolver + FileSystem + Process）
pub struct PlutilDumpSource {
    env: Arc<dyn EnvResolver>,
    fs: Arc<dyn FileSystem>,
    process: Arc<dyn Process>,
    staging_dir: PathBuf,
}

impl PlutilDumpSource {
    pub fn new(
        env: Arc<dyn EnvResolver>,
        fs: Arc<dyn FileSystem>,
        process: Arc<dyn Process>,
        staging_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            env,
            fs,
            process,
            staging_dir: staging_dir.into(),
        }
    }

    fn preferences_path(&self) -> Result<PathBuf, Error> {
        Ok(self.env.home_dir()?.join(PREFERENCES_PATH))
    }

    /// キャッシュが存在し、設定ファイル以降に書かれていれば true
    fn cache_is_fresh(&self, cached: &Path, preferences: &FileMetadata) -> bool {
        match self.fs.metadata(cached) {
            Ok(meta) => match (meta.modified(), preferences.modified()) {
                (Some(cached_at), Some(prefs_at)) => cached_at >= prefs_at,
                _ => true,
            },
            Err(_) => false,
        }
    }

    fn convert(&self, staged_plist: &Path) -> Result<String, Error> {
        let args = vec!["-p".to_string(), staged_plist.display().to_string()];
        let output = self.process.output(Path::new(PLUTIL), &args)?;
        if !output.success() {
            return Err(Error::system(format!(
                "{} exited with status {}: {}",
                PLUTIL,
                output.code,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| Error::system(format!("{} output is not valid UTF-8: {}", PLUTIL, e)))
    }
}

impl DumpSource for PlutilDumpSource {
    fn stage(&self) -> Result<StagedDump, Error> {
        let preferences = self.preferences_path()?;
        let prefs_meta = self
            .fs
            .metadata(&preferences)
            .map_err(|_| Error::source_missing(preferences.display().to_string()))?;

        let cached = self.staging_dir.join(CACHED_DUMP_NAME);
        if self.cache_is_fresh(&cached, &prefs_meta) {
            return Ok(StagedDump {
                path: cached,
                cache_hit: true,
            });
        }

        let suffix = unique_suffix();
        let staged_plist = self
            .staging_dir
            .join(format!("{}.{}.plist", STAGED_PLIST_STEM, suffix));
        self.fs.copy(&preferences, &staged_plist)?;
        let converted = self.convert(&staged_plist);
        let _ = self.fs.remove_file(&staged_plist);
        let dump = converted?;

        // 書き終えたものだけをキャッシュに差し替える
        let tmp = self
            .staging_dir
            .join(format!("{}.{}.tmp", CACHED_DUMP_NAME, suffix));
        let persisted = self
            .fs
            .write(&tmp, &dump)
            .and_then(|_| self.fs.rename(&tmp, &cached));
        if let Err(e) = persisted {
            let _ = self.fs.remove_file(&tmp);
            return Err(e);
        }

        Ok(StagedDump {
            path: cached,
            cache_hit: false,
        })
    }
}
