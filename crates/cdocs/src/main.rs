//! cdocs CLI - catalog documentation navigation.
//!
//! Provides commands for:
//! - `nav`: Print the resolved sidebar
//! - `adjacent`: Print the previous/next pages of a page
//! - `domains`: Print the assembled domains
//! - `messages`: Print the messages of a domain's services
//! - `language`: Print the ubiquitous language of a domain

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdjacentArgs, DomainsArgs, GlobalArgs, LanguageArgs, MessagesArgs, NavArgs};
use error::CliError;
use output::Output;

/// cdocs - Catalog documentation navigation.
#[derive(Parser)]
#[command(name = "cdocs", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved sidebar as JSON.
    Nav(NavArgs),
    /// Print the previous and next pages of a slug as JSON.
    Adjacent(AdjacentArgs),
    /// Print the assembled domains as JSON.
    Domains(DomainsArgs),
    /// Print the messages sent and received by a domain as JSON.
    Messages(MessagesArgs),
    /// Print the ubiquitous-language entries of a domain as JSON.
    Language(LanguageArgs),
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let site = cli.global.load_site()?;

    match cli.command {
        Commands::Nav(args) => args.execute(&site, output),
        Commands::Adjacent(args) => args.execute(&site, output),
        Commands::Domains(args) => args.execute(&site, output),
        Commands::Messages(args) => args.execute(&site, output),
        Commands::Language(args) => args.execute(&site, output),
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
