//! ユースケーステスト用のモックポート

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use common::adapter::{NoopLog, StdFileSystem};
use common::error::Error;
use common::ports::outbound::EnvResolver;

use crate::ports::outbound::{DumpSource, FeedbackSink, StagedDump};
use crate::usecase::{ListProfilesUseCase, WorkflowUseCase};

/// 固定テキストを一時ファイルに置いて返す DumpSource（None なら変換元なし）
pub struct FixedDumpSource {
    dir: tempfile::TempDir,
    text: Option<Vec<u8>>,
}

impl FixedDumpSource {
    pub fn with_text(text: &str) -> Self {
        Self::with_bytes(text.as_bytes())
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            text: Some(bytes.to_vec()),
        }
    }

    pub fn missing() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            text: None,
        }
    }
}

impl DumpSource for FixedDumpSource {
    fn stage(&self) -> Result<StagedDump, Error> {
        let text = self
            .text
            .as_ref()
            .ok_or_else(|| Error::source_missing("/Users/test/Library/Preferences/com.googlecode.iterm2.plist"))?;
        let path = self.dir.path().join("dump.txt");
        std::fs::write(&path, text).unwrap();
        Ok(StagedDump {
            path,
            cache_hit: false,
        })
    }
}

/// 送られた文書を記録する FeedbackSink
#[derive(Default)]
pub struct RecordingSink {
    pub documents: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// 1 回だけ送られた文書を返す
    pub fn single_document(&self) -> String {
        let docs = self.documents.lock().unwrap();
        assert_eq!(docs.len(), 1, "expected exactly one document, got {:?}", docs);
        docs[0].clone()
    }
}

impl FeedbackSink for RecordingSink {
    fn send(&self, document: &str) -> Result<(), Error> {
        if self.fail {
            return Err(Error::io_msg("Failed to write feedback: broken pipe"));
        }
        self.documents.lock().unwrap().push(document.to_string());
        Ok(())
    }
}

/// alfred_* 変数だけを差し替える EnvResolver
#[derive(Default)]
pub struct FakeEnv {
    pub home: Option<PathBuf>,
    pub name: Option<String>,
    pub bundle_id: Option<String>,
}

impl EnvResolver for FakeEnv {
    fn home_dir(&self) -> Result<PathBuf, Error> {
        self.home.clone().ok_or_else(|| Error::env("HOME is not set"))
    }
    fn debugging(&self) -> bool {
        false
    }
    fn workflow_name(&self) -> Option<String> {
        self.name.clone()
    }
    fn workflow_bundle_id(&self) -> Option<String> {
        self.bundle_id.clone()
    }
    fn workflow_cache_dir(&self) -> Option<PathBuf> {
        None
    }
}

pub fn list_profiles(source: Arc<dyn DumpSource>) -> ListProfilesUseCase {
    ListProfilesUseCase::new(source, Arc::new(StdFileSystem), Arc::new(NoopLog))
}

pub fn workflow_with(
    source: Arc<dyn DumpSource>,
    env: FakeEnv,
    sink: Arc<RecordingSink>,
) -> WorkflowUseCase {
    WorkflowUseCase::new(
        list_profiles(source),
        sink as Arc<dyn FeedbackSink>,
        Arc::new(env),
        Arc::new(NoopLog),
    )
}

/// 文書を XML として読み、要素テキストを出現順に取り出す（空要素は ""）
pub fn element_texts(doc: &str, tag: &str) -> Vec<String> {
    let parsed = roxmltree::Document::parse(doc).unwrap();
    parsed
        .descendants()
        .filter(|n| n.has_tag_name(tag))
        .map(|n| n.text().unwrap_or("").to_string())
        .collect()
}

pub const DEV_DUMP: &str = "\"Name\" => \"Dev\"\n\"Tags\" => \n0 => \"work\"\n1 => \"cli\"\n]\n";

pub const TWO_PROFILES_DUMP: &str = r#"{
  "New Bookmarks" => [
    0 => {
      "Guid" => "A1"
      "Name" => "Personal"
      "Tags" => [
        0 => "home"
      ]
    }
    1 => {
      "Guid" => "B2"
      "Name" => "Work"
      "Tags" => [
        0 => "office"
        1 => "vpn"
      ]
    }
  ]
}
"#;
