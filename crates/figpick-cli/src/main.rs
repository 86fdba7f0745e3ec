//! figpick CLI
//!
//! Fuzzy selection of LaTeX figure files through the platform picker
//! (`rofi` on Linux, `choose` on macOS).

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use figpick_cli::{edit_cmd, pick_cmd};

#[derive(Debug, Parser)]
#[command(name = "figpick", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Pick one line from stdin with the platform fuzzy selector
    Pick(pick_cmd::PickArgs),
    /// Pick a figure from a directory and open it in the editor
    Edit(edit_cmd::EditArgs),
    /// List the figure labels a directory would offer
    List(edit_cmd::EditArgs),
}

fn main() -> Result<ExitCode> {
    figpick_core::tracing_init::init_tracing("figpick=warn");

    let cli = Cli::parse();
    match cli.command {
        Commands::Pick(args) => pick_cmd::run(&args),
        Commands::Edit(args) => {
            edit_cmd::edit(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::List(args) => {
            edit_cmd::list(&args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
