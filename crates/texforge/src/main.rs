mod cli;
mod commands;
mod context;
mod logging;
mod output;
mod vars_file;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = Context::new(cli.config.as_deref(), cli.verbose).and_then(|ctx| {
        match cli.command {
            Commands::Render(args) => commands::render::run(args, &ctx),
            Commands::Detect { file, json } => commands::detect::run(&file, json),
            Commands::Vars { file, get, json } => {
                commands::vars::run(&file, get.as_deref(), json, &ctx)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
