//! docroute CLI
//!
//! Resolves URL paths to Markdown files under a content root and reads or
//! writes the documents they address.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {e}", "warning".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");

    let ctx = Context::load(&cli.root, cli.config.as_deref())?;
    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { url } => commands::run_resolve(ctx, &url),
        Commands::Show { url, json, raw } => commands::run_show(ctx, &url, json, raw),
        Commands::Write {
            url,
            meta,
            body,
            body_file,
        } => commands::run_write(ctx, &url, &meta, body.as_deref(), body_file.as_deref()),
        Commands::Config => commands::run_config(ctx),
    }
}
