use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "WordMap CLI - lays word sequences out as interlocking crossword-style blocks and searches word orders for the most compact layout.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to evaluate word orders.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay the words out in the given order with a single greedy pass.
    Map(MapArgs),
    /// Search word orders for the layout with the fewest blocks and smallest area.
    Optimize(OptimizeArgs),
    /// Report which words are present in a dictionary word list.
    Check(CheckArgs),
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One text row per grid row, blocks separated by dashed lines.
    #[default]
    Text,
    /// Block summaries and scores as JSON.
    Json,
}

/// Where the words come from. Exactly one source may be used.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct WordSource {
    /// Words to lay out, in order.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// A sentence or lyric line; split on whitespace and normalized.
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Word list (one word per line) to validate the input against.
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Drop words missing from the dictionary instead of only warning.
    #[arg(long, requires = "dictionary")]
    pub skip_unknown: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format, overriding the config file.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the layout to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `map` subcommand.
#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub source: WordSource,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub source: WordSource,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the maximum number of word orders to evaluate.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_permutations: Option<u64>,

    /// Override how many word orders are evaluated per parallel batch.
    #[arg(long, value_name = "INT")]
    pub batch_size: Option<usize>,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S optimization.max-permutations=5000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: WordSource,

    /// Word list (one word per line). Falls back to `dictionary.path` in the config file.
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimize_accepts_positional_words_and_overrides() {
        let cli = Cli::parse_from([
            "wordmap", "-vv", "optimize", "cat", "tab", "bar", "-n", "50", "--format", "json",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Optimize(args) = cli.command else {
            panic!("Expected 'optimize' subcommand");
        };
        assert_eq!(args.source.words, vec!["cat", "tab", "bar"]);
        assert_eq!(args.max_permutations, Some(50));
        assert_eq!(args.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn word_sources_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["wordmap", "map", "cat", "--text", "the cat"]);
        assert!(result.is_err());
    }

    #[test]
    fn skip_unknown_requires_a_dictionary() {
        let result = Cli::try_parse_from(["wordmap", "map", "cat", "--skip-unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["wordmap", "-q", "-v", "map", "cat"]);
        assert!(result.is_err());
    }
}
