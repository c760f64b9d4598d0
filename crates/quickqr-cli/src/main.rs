mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quickqr", about = "Fetch QR code images from quickchart.io")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the request URL for a target text
    Url(commands::url::UrlArgs),
    /// Fetch a QR code image and write it to disk
    Fetch(commands::fetch::FetchArgs),
    /// Write the bundled placeholder image
    Placeholder(commands::placeholder::PlaceholderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Url(args) => commands::url::run(args),
        Commands::Fetch(args) => commands::fetch::run(args),
        Commands::Placeholder(args) => commands::placeholder::run(args),
    }
}
