use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Locale;

/// Format-keyed random data generator
#[derive(Parser, Debug, Clone)]
#[command(name = "metis-formats", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "METIS_FORMATS_CONFIG", default_value = "metis-formats.toml")]
    pub config: PathBuf,

    /// Vocabulary locale (en, fr_fr, zh_cn, zh_tw)
    #[arg(long, env = "METIS_FORMATS_LOCALE")]
    pub locale: Option<Locale>,

    /// Seed for reproducible output
    #[arg(long, env = "METIS_FORMATS_SEED")]
    pub seed: Option<u64>,

    /// Maximum nesting depth of generated HTML
    #[arg(long, env = "METIS_FORMATS_HTML_MAX_DEPTH")]
    pub html_max_depth: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate values for a format key
    Generate {
        /// Format key, e.g. `uuid`, `byte` or `city`
        format: String,

        /// Minimum length (unit count for count-bound formats)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Maximum length
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Number of values to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print a JSON array instead of one value per line
        #[arg(long)]
        json: bool,
    },
    /// List every registered format key with its family
    List {
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["metis-formats", "list"]);
        assert_eq!(cli.config, PathBuf::from("metis-formats.toml"));
        assert!(cli.locale.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.html_max_depth.is_none());
        assert_eq!(cli.command, Command::List { json: false });
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "metis-formats",
            "--config",
            "custom.toml",
            "--locale",
            "en",
            "--seed",
            "42",
            "--html-max-depth",
            "5",
            "generate",
            "byte",
            "--min",
            "10",
            "--max",
            "10",
            "-n",
            "3",
            "--json",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.locale, Some(Locale::En));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.html_max_depth, Some(5));
        assert_eq!(
            cli.command,
            Command::Generate {
                format: "byte".to_string(),
                min: Some(10),
                max: Some(10),
                count: 3,
                json: true,
            }
        );
    }

    #[test]
    fn test_negative_bounds_reach_the_registry() {
        let cli = Cli::parse_from(["metis-formats", "generate", "words", "--min", "-1"]);
        match cli.command {
            Command::Generate { min, max, .. } => {
                assert_eq!(min, Some(-1));
                assert_eq!(max, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        let result = Cli::try_parse_from(["metis-formats", "--locale", "ko_kr", "list"]);
        assert!(result.is_err());
    }
}
