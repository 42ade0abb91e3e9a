use clap::Parser;
use std::path::PathBuf;

use crate::config::LineSeparator;

#[derive(Debug, Default, Parser)]
#[command(name = "sk")]
#[command(version = "0.1.0")]
#[command(about = "A small terminal text editor")]
pub struct CliArgs {
    /// Config file to load instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Line separator inserted by Enter (lf, crlf or cr); overrides the config file
    #[arg(long)]
    pub line_separator: Option<LineSeparator>,

    /// Use terminal color palette instead of theme colors
    #[arg(long, short = 't')]
    pub terminal_palette: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cli_args() {
        let args = CliArgs::default();
        assert!(args.config.is_none());
        assert!(args.line_separator.is_none());
        assert!(!args.terminal_palette);
    }

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::parse_from(["sk"]);
        assert!(args.config.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_parse_line_separator() {
        let args = CliArgs::parse_from(["sk", "--line-separator", "crlf"]);
        assert_eq!(args.line_separator, Some(LineSeparator::Crlf));
        assert!(CliArgs::try_parse_from(["sk", "--line-separator", "nl"]).is_err());
    }

    #[test]
    fn test_parse_paths_and_palette() {
        let args = CliArgs::parse_from(["sk", "-c", "my.toml", "-t", "--log-file", "sk.log"]);
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("sk.log")));
        assert!(args.terminal_palette);
    }
}
