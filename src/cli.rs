use crate::domain::models::Section;
use crate::theme::PaletteType;
use clap::Parser;
use std::path::PathBuf;

/// Searchable reference of git commands and fixes for common git problems.
#[derive(Debug, Parser)]
#[command(name = "gitref", version, about)]
pub struct Args {
    /// Section to open on start
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Start with this search query
    #[arg(long, short)]
    pub query: Option<String>,

    /// Color theme; overrides the config file
    #[arg(long, value_enum)]
    pub theme: Option<PaletteType>,

    /// Config file to use instead of ~/.config/gitref/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Never touch the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gitref"]).unwrap();
        assert!(args.section.is_none());
        assert!(args.query.is_none());
        assert!(!args.no_clipboard);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "gitref",
            "--section",
            "problems",
            "-q",
            "merge",
            "--theme",
            "catppuccin-mocha",
            "--log-file",
            "/tmp/gitref.log",
            "--no-clipboard",
        ])
        .unwrap();
        assert_eq!(args.section, Some(Section::Problems));
        assert_eq!(args.query.as_deref(), Some("merge"));
        assert_eq!(args.theme, Some(PaletteType::CatppuccinMocha));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/gitref.log")));
        assert!(args.no_clipboard);
    }

    #[test]
    fn test_rejects_unknown_section() {
        assert!(Args::try_parse_from(["gitref", "--section", "stash"]).is_err());
    }
}
