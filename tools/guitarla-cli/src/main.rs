//! GuitarLA CLI - a terminal storefront over the cart engine.
//!
//! Every invocation behaves like a page load: the cart is restored from the
//! store directory, at most one intent is applied, and the result is shown.
//!
//! Commands:
//! - `guitarla catalog` - List the guitars for sale
//! - `guitarla cart` - Show the cart
//! - `guitarla add <id>` - Add a guitar to the cart
//! - `guitarla remove <id>` - Remove a guitar from the cart
//! - `guitarla increase <id>` / `guitarla decrease <id>` - Change a quantity
//! - `guitarla clear` - Empty the cart
//! - `guitarla config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ClearArgs, ConfigArgs, ItemArgs};

/// GuitarLA - browse guitars and manage your cart
#[derive(Parser)]
#[command(name = "guitarla")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    Catalog,

    /// Show the cart
    Cart,

    /// Add one of a guitar to the cart
    Add(ItemArgs),

    /// Remove a guitar from the cart
    Remove(ItemArgs),

    /// Increase the quantity of a guitar in the cart
    Increase(ItemArgs),

    /// Decrease the quantity of a guitar in the cart
    Decrease(ItemArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog => commands::catalog::run(&ctx),
        Commands::Cart => commands::cart::show(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Increase(args) => commands::cart::increase(args, &ctx),
        Commands::Decrease(args) => commands::cart::decrease(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
