//! metastock CLI - decodes metastock price-history directories.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "metastock")]
#[command(about = "Decode metastock catalogs and price-series files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Text encoding of symbol and name fields (ascii, latin1, windows-1252, ...)
    #[arg(long, default_value = "ascii", global = true)]
    encoding: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the merged catalog of a data directory
    List {
        /// Data directory containing master/emaster/xmaster
        dir: PathBuf,

        /// Write the listing in a machine-readable format instead of a table
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Show one catalog entry and the span of its price series
    Info {
        /// Data directory
        dir: PathBuf,

        /// File number of the entry (the n in F<n>.DAT)
        file_id: u16,
    },

    /// Decode a single price-series file
    Read {
        /// Path to an F<n>.DAT or F<n>.MWD file
        file: PathBuf,

        /// Fields per record (7 for daily, 8 for intraday)
        #[arg(long, default_value = "7")]
        fields: u8,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode every series listed in a data directory
    Export {
        /// Data directory
        dir: PathBuf,

        /// Output directory. Files named <symbol>.<format>
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Only export entries with this symbol
        #[arg(short, long)]
        symbol: Option<String>,
    },
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `-v`/`-q`.
fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "metastock={level},metastock_reader={level},metastock_codec={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let options = display::read_options(&cli.encoding)?;

    match command {
        Commands::List { dir, format } => commands::list::list_catalog(&dir, &options, format),
        Commands::Info { dir, file_id } => commands::info::show_info(&dir, file_id, &options),
        Commands::Read {
            file,
            fields,
            format,
            output,
        } => commands::read::read_file(&file, fields, format, output.as_deref(), cli.quiet),
        Commands::Export {
            dir,
            output_dir,
            format,
            symbol,
        } => commands::export::export(
            &dir,
            &output_dir,
            format,
            symbol.as_deref(),
            &options,
            cli.quiet,
        ),
    }
}
