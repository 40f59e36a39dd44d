use clap::builder::ArgAction;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// 絞り込みクエリ（未指定・空文字なら全件）
    pub query: String,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("openprofile")
        .about("List iTerm2 profiles as Alfred script filter feedback")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("query")
                .value_name("query")
                .help("Case-insensitive filter over profile names and tags")
                .action(ArgAction::Set)
                .num_args(1)
                .allow_hyphen_values(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        query: matches
            .get_one::<String>("query")
            .cloned()
            .unwrap_or_default(),
    }
}

/// 与えられた引数列（先頭はプログラム名）を解析する
pub fn parse_args_from<I, T>(args: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string().trim().to_string()))?;
    Ok(matches_to_config(&matches))
}

/// プロセスのコマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    parse_args_from(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        assert_eq!(Config::default().query, "");
    }

    #[test]
    fn test_query_argument() {
        let config = parse_args_from(["openprofile", "dev"]).unwrap();
        assert_eq!(config.query, "dev");
    }

    #[test]
    fn test_missing_query_is_empty() {
        let config = parse_args_from(["openprofile"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_empty_query() {
        let config = parse_args_from(["openprofile", ""]).unwrap();
        assert_eq!(config.query, "");
    }

    #[test]
    fn test_query_with_spaces_is_one_argument() {
        let config = parse_args_from(["openprofile", "office vpn"]).unwrap();
        assert_eq!(config.query, "office vpn");
    }

    #[test]
    fn test_hyphen_query_is_accepted() {
        let config = parse_args_from(["openprofile", "-prod"]).unwrap();
        assert_eq!(config.query, "-prod");
    }

    #[test]
    fn test_extra_argument_is_invalid() {
        let err = parse_args_from(["openprofile", "a", "b"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
