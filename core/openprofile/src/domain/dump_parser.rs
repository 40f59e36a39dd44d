//! `plutil -p` のテキストダンプからプロファイルを取り出す行指向パーサ
//!
//! ダンプには文法の保証がないため、固定のマーカー文字列を部分一致で探す。
//! 1 行ごとに状態を 1 ステップ進めるだけで、エラーは返さない（認識できない行は捨てる）。

use std::mem;

use super::profile::ProfileRecord;

/// 名前行のマーカー
pub const NAME_MARKER: &str = "\"Name\" => ";
/// タグブロック開始行のマーカー
pub const TAGS_MARKER: &str = "\"Tags\" => ";
/// タグブロック終了
const TAGS_CLOSE: char = ']';
/// タグ行 `<index> => "<tag>"` の区切り
const ENTRY_SEPARATOR: &str = "=>";

/// 引用符をすべて除き、前後の空白を落とす
fn clean_value(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

/// 1 回のパースの間だけ存在する状態
///
/// `pending_tags` に追加されるのは `in_tag_block` が true の間だけ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    current_name: String,
    pending_tags: Vec<String>,
    in_tag_block: bool,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 行ぶん状態を進める。タグブロックが閉じたときだけレコードを返す。
    ///
    /// 判定順: 名前行 → タグ開始行 → (ブロック内) 終了行 → (ブロック内) タグ行。
    pub fn step(&mut self, line: &str) -> Option<ProfileRecord> {
        if let Some((_, value)) = line.split_once(NAME_MARKER) {
            // ブロック内でも上書きするだけで、レコードは閉じない
            self.current_name = clean_value(value);
            return None;
        }
        if line.contains(TAGS_MARKER) {
            self.in_tag_block = true;
            return None;
        }
        if !self.in_tag_block {
            return None;
        }
        if line.contains(TAGS_CLOSE) {
            self.in_tag_block = false;
            return Some(ProfileRecord::new(
                mem::take(&mut self.current_name),
                mem::take(&mut self.pending_tags),
            ));
        }
        if let Some((_, value)) = line.split_once(ENTRY_SEPARATOR) {
            self.pending_tags.push(clean_value(value));
        }
        None
    }
}

/// ダンプの全行を上から順にパースする
///
/// 終了マーカーが来ないまま入力が尽きたブロックは捨てる。
pub fn parse<I, S>(lines: I) -> Vec<ProfileRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParserState::new();
    lines
        .into_iter()
        .filter_map(|line| state.step(line.as_ref()))
        .collect()
}
