//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, StderrLog, StdEnvResolver, StdFileSystem, StdProcess,
};
use common::ports::outbound::{EnvResolver, FileSystem, Log, Process};

use crate::adapter::plutil_dump_source::STAGING_DIR;
use crate::adapter::{PlutilDumpSource, StdoutFeedbackSink};
use crate::ports::outbound::{DumpSource, FeedbackSink};
use crate::usecase::{ListProfilesUseCase, WorkflowUseCase};

/// ワークフローのキャッシュディレクトリ配下の JSONL ログ
const LOG_FILE_NAME: &str = "openprofile.log.jsonl";

/// 配線で組み立てたポート群（main の Runner で利用）
pub struct App {
    pub logger: Arc<dyn Log>,
    pub workflow_use_case: WorkflowUseCase,
}

/// stderr は常に、キャッシュディレクトリがあれば JSONL ファイルにも出す
fn wire_logger(env_resolver: &dyn EnvResolver, fs: &Arc<dyn FileSystem>) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> =
        vec![Arc::new(StderrLog::for_debugging(env_resolver.debugging()))];
    if let Some(dir) = env_resolver.workflow_cache_dir() {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(fs), dir.join(LOG_FILE_NAME))));
    }
    Arc::new(CompositeLog::new(logs))
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_openprofile() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let process: Arc<dyn Process> = Arc::new(StdProcess);
    let logger = wire_logger(&*env_resolver, &fs);

    let source: Arc<dyn DumpSource> = Arc::new(PlutilDumpSource::new(
        Arc::clone(&env_resolver),
        Arc::clone(&fs),
        process,
        PathBuf::from(STAGING_DIR),
    ));
    let sink: Arc<dyn FeedbackSink> = Arc::new(StdoutFeedbackSink);

    let list_profiles = ListProfilesUseCase::new(source, Arc::clone(&fs), Arc::clone(&logger));
    let workflow_use_case =
        WorkflowUseCase::new(list_profiles, sink, env_resolver, Arc::clone(&logger));

    App {
        logger,
        workflow_use_case,
    }
}
