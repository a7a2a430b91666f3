//! CLI frontend for rolling on Oracle tables.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use oracle_core::OracleConfig;

#[derive(Parser)]
#[command(
    name = "oracle",
    about = "Oracle — roll on random tables with embedded dice",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML table file (default: built-in tables)
    #[arg(short, long, global = true)]
    tables: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tables and their row counts
    List,

    /// Show the numbered rows of a table
    Show {
        /// Table name
        table: String,
    },

    /// Pick random rows from a table and render their dice
    Roll {
        /// Table name
        table: String,

        /// Number of distinct rows to pick
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single template such as "You find {2d6} gold"
    Render {
        /// Template text
        template: String,
    },

    /// Launch the interactive table browser (default)
    Tui,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = OracleConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = cli.tables {
        config = config.with_tables(path);
    }

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::List => commands::list::run(&config),
        Commands::Show { table } => commands::show::run(&config, &table),
        Commands::Roll { table, count, json } => commands::roll::run(&config, &table, count, json),
        Commands::Render { template } => commands::render::run(&config, &template),
        Commands::Tui => commands::build_oracle(&config).and_then(tui::run),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` or else by `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
