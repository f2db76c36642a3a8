mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Context::new(cli.config, cli.output).and_then(|ctx| match cli.command {
        Commands::ToDoc { input, pretty } => commands::to_doc::run(&ctx, input, pretty),
        Commands::ToHtml { input } => commands::to_html::run(&ctx, input),
        Commands::Segment {
            input,
            html,
            pretty,
        } => commands::segment::run(&ctx, input, html, pretty),
        Commands::Config => commands::config::run(&ctx),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
