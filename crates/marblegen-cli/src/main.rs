//! Marblegen CLI - render deterministic marble surfaces
//!
//! This binary provides commands for rendering surfaces to PNG, listing the
//! built-in presets and printing golden-image hashes.

use clap::Parser;
use std::process::ExitCode;

use marblegen_cli::{commands, logging};

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            surface,
            out_dir,
            randomize,
            json,
        } => commands::render::run(&surface.into_request(randomize), &out_dir, json),
        Commands::Presets { pretty } => commands::presets::run(pretty),
        Commands::Hash { surface, json } => {
            commands::hash::run(&surface.into_request(false), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
