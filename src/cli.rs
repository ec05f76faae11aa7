use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dtx")]
#[command(
    version,
    about = "Design Token Extractor - Turn design-tool component trees into light/dark design tokens",
    long_about = "Design Token Extractor (DTX)\n\nCommands:\n- extract: read an exported document tree (and optional local variables), extract per-category tokens, derive missing hover/dark/danger entries, and apply correction files.\n- categories: list the category names used in output, config and correction file names.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output (debug logs on stderr)")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) for enabled categories and derivation settings; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract design tokens from an exported document
    Extract {
        #[arg(
            long,
            value_name = "PATH",
            help = "Document JSON (a files-endpoint response or a single node)"
        )]
        document: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "Local variables JSON used to resolve bound paints per mode"
        )]
        variables: Option<PathBuf>,

        #[arg(
            long,
            value_name = "DIR",
            help = "Directory of correction files (<category>.json) merged over the results"
        )]
        corrections: Option<PathBuf>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Categories to extract (comma-separated; see `dtx categories`)"
        )]
        categories: Option<Vec<String>>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
    /// List known token categories
    Categories {
        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
