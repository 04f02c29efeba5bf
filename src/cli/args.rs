use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::USAGE_LOG_FILE;

/// Directory holding `lang_support.csv` and `word_skip_lists/`.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

#[derive(Parser, Debug)]
#[command(name = "auto-translate")]
#[command(about = "Sentence-by-sentence document translation for language learners")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Args {
    /// Text file to translate
    #[arg(required = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (default: ./config.txt, then ~/.config/auto-translate/config.txt)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Resources directory with lang_support.csv and word_skip_lists/
    #[arg(short = 'r', long = "resources", default_value = DEFAULT_RESOURCES_DIR)]
    pub resources: PathBuf,

    /// Usage log receiving the translated character count of each run
    #[arg(long = "log-file", default_value = USAGE_LOG_FILE)]
    pub log_file: PathBuf,

    /// Source language code, or "auto" to detect it
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., en, fr, de)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation provider (google, google_cloud, bing)
    #[arg(short = 'p', long = "provider")]
    pub provider: Option<String>,

    /// Output format (txt, tex)
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<String>,

    /// Directory the translated document is written to
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<String>,

    /// Add a word-by-word translation below every sentence
    #[arg(long)]
    pub learning: bool,

    /// Suppress progress and informational output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes per provider
    Languages {
        /// Resources directory with lang_support.csv
        #[arg(short = 'r', long = "resources", default_value = DEFAULT_RESOURCES_DIR)]
        resources: PathBuf,

        /// Only list languages supported by this provider
        #[arg(short = 'p', long = "provider")]
        provider: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_flags() {
        let args = Args::try_parse_from([
            "auto-translate",
            "-f",
            "de",
            "-t",
            "en",
            "-p",
            "bing",
            "-m",
            "tex",
            "-o",
            "out",
            "--learning",
            "book.txt",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("book.txt")));
        assert_eq!(args.from.as_deref(), Some("de"));
        assert_eq!(args.to.as_deref(), Some("en"));
        assert_eq!(args.provider.as_deref(), Some("bing"));
        assert_eq!(args.mode.as_deref(), Some("tex"));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
        assert!(args.learning);
        assert_eq!(args.resources, PathBuf::from(DEFAULT_RESOURCES_DIR));
        assert_eq!(args.log_file, PathBuf::from(USAGE_LOG_FILE));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_languages_subcommand() {
        let args =
            Args::try_parse_from(["auto-translate", "languages", "--provider", "google"]).unwrap();

        match args.command {
            Some(Command::Languages {
                resources,
                provider,
            }) => {
                assert_eq!(resources, PathBuf::from(DEFAULT_RESOURCES_DIR));
                assert_eq!(provider.as_deref(), Some("google"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_file_required_without_subcommand() {
        assert!(Args::try_parse_from(["auto-translate"]).is_err());
    }

    #[test]
    fn test_quiet_is_global() {
        let args = Args::try_parse_from(["auto-translate", "languages", "-q"]).unwrap();
        assert!(args.quiet);
    }
}
