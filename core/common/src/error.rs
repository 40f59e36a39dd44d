//! エラーハンドリング

/// エラー型
///
/// ポート・アダプタ・ユースケースはすべて `Result<_, Error>` を返し、`?` で伝播する。
/// 最上位のランナーだけがこれをフィードバック項目に変換する。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0}")]
    System(String),
    #[error("Environment error: {0}")]
    Env(String),
    #[error("JSON error: {0}")]
    Json(String),
    /// 変換元の設定ファイルが存在しない
    #[error("Can not find plist file at: {0}")]
    SourceMissing(String),
}

impl Error {
    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// システムエラー（外部コマンドの失敗など）
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// 変換元ファイル未検出エラー（引数はファイルパス）
    pub fn source_missing(path: impl Into<String>) -> Self {
        Error::SourceMissing(path.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err, Error::InvalidArgument("test".to_string()));
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = Error::system("plutil failed");
        assert_eq!(err.to_string(), "plutil failed");
    }

    #[test]
    fn test_source_missing_message() {
        let err = Error::source_missing("/Users/me/Library/Preferences/x.plist");
        assert_eq!(
            err.to_string(),
            "Can not find plist file at: /Users/me/Library/Preferences/x.plist"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = e.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
