//! ランチャー（Alfred）向けフィードバック項目と XML 文書の生成
//!
//! 文書は全体をメモリ上で組み立ててから 1 回で書き出す。途中までの出力は起きない。

use std::fmt::Display;

use super::profile::ProfileRecord;

/// エラー項目に使うシステムアイコン
pub const ICON_ERROR: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/AlertStopIcon.icns";

/// 本文の前に置くエンコーディング宣言
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// 結果 1 件分の表示単位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackItem {
    pub title: String,
    pub subtitle: String,
    /// 項目が選ばれたときにランチャーへ返す引数
    pub arg: String,
    /// 選択して実行できるか
    pub valid: bool,
    pub icon: Option<String>,
}

impl FeedbackItem {
    /// プロファイル 1 件を項目に写す（title/arg = 名前、subtitle = 連結タグ）
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            title: record.name.clone(),
            subtitle: record.joined_tags(),
            arg: record.name.clone(),
            valid: true,
            icon: None,
        }
    }

    /// 実行中のエラーを表す項目
    pub fn error(workflow_name: &str, err: &dyn Display) -> Self {
        Self {
            title: format!("Error in workflow '{}'", workflow_name),
            subtitle: err.to_string(),
            arg: String::new(),
            valid: false,
            icon: Some(ICON_ERROR.to_string()),
        }
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("<item valid=\"");
        out.push_str(if self.valid { "yes" } else { "no" });
        out.push_str("\">");
        push_element(out, "title", &self.title);
        push_element(out, "subtitle", &self.subtitle);
        // arg は空なら出さない
        if !self.arg.is_empty() {
            push_element(out, "arg", &self.arg);
        }
        if let Some(icon) = self.icon.as_deref().filter(|s| !s.is_empty()) {
            push_element(out, "icon", icon);
        }
        out.push_str("</item>");
    }
}

impl From<&ProfileRecord> for FeedbackItem {
    fn from(record: &ProfileRecord) -> Self {
        Self::from_record(record)
    }
}

/// XML 1.0 の文書に書ける文字か（タブ・改行以外の制御文字と U+FFFE/U+FFFF は不可）
fn is_xml_char(ch: char) -> bool {
    match ch {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => c >= ' ',
    }
}

/// テキスト・属性値に使えるようにエスケープする
///
/// XML 1.0 で表せない文字は参照でも書けないので落とす。
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().filter(|c| is_xml_char(*c)) {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_element(out: &mut String, tag: &str, text: &str) {
    if text.is_empty() {
        out.push_str(&format!("<{} />", tag));
    } else {
        out.push_str(&format!("<{}>{}</{}>", tag, xml_escape(text), tag));
    }
}

/// 宣言 + `<items>` ルートの文書全体を返す
pub fn render_document(items: &[FeedbackItem]) -> String {
    let mut out = String::from(XML_DECLARATION);
    if items.is_empty() {
        out.push_str("<items />");
        return out;
    }
    out.push_str("<items>");
    for item in items {
        item.write_xml(&mut out);
    }
    out.push_str("</items>");
    out
}
