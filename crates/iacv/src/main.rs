use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use miette::Result;
use tracing_subscriber::EnvFilter;

pub mod commands;

use commands::check::{self, OutputFormat};
use commands::compare;
use commands::latest;
use commands::sort;

#[derive(Parser)]
#[command(version, about = "Parse, compare, and sort version identifiers", long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two version strings")]
    Compare {
        left: String,
        right: String,
    },

    #[command(about = "Sort version strings in ascending order")]
    Sort {
        /// Versions to sort; read from stdin when empty
        versions: Vec<String>,

        /// Skip strings that do not parse instead of failing
        #[arg(long)]
        lenient: bool,
    },

    #[command(about = "Print the newest of the given versions")]
    Latest {
        /// Candidate versions; read from stdin when empty
        versions: Vec<String>,

        /// Skip strings that do not parse instead of failing
        #[arg(long)]
        lenient: bool,
    },

    #[command(about = "Check whether a string parses as a version")]
    Check {
        version: String,

        /// Output format for the parsed version
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.verbosity.tracing_level_filter().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compare { left, right } => compare::compare(&left, &right)?,
        Commands::Sort { versions, lenient } => sort::sort(versions, lenient)?,
        Commands::Latest { versions, lenient } => latest::latest(versions, lenient)?,
        Commands::Check { version, format } => check::check(&version, format)?,
    }

    Ok(())
}
