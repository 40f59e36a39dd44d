//! プロファイルレコードと検索フィルタ

/// ダンプから取り出した 1 プロファイル（名前 + タグ列）
///
/// タグブロックが閉じた時点で確定し、以後は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub tags: Vec<String>,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// タグを半角スペース 1 つで連結（元の順序のまま）
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }

    /// 小文字化済みのクエリが名前か連結タグの部分文字列なら true
    fn matches_folded(&self, folded_query: &str) -> bool {
        self.name.to_lowercase().contains(folded_query)
            || self.joined_tags().to_lowercase().contains(folded_query)
    }
}

/// クエリで絞り込む（大文字小文字を無視した部分一致）
///
/// 空クエリなら入力をそのまま返す。順序は変えない。
pub fn filter_records(records: Vec<ProfileRecord>, query: &str) -> Vec<ProfileRecord> {
    if query.is_empty() {
        return records;
    }
    let folded = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.matches_folded(&folded))
        .collect()
}
