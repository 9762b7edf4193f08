//! vplay binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use vplay::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions print to stdout and must not depend on a writable log dir
    if let Commands::Completions { shell } = &cli.command {
        commands::completions::handle(*shell);
        return Ok(());
    }

    if let Err(e) = vplay::logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Commands::Play {
            source,
            subtitles,
            duration,
            delay,
            speed,
            download_rate,
        } => commands::play::handle(source, subtitles, duration, delay, speed, download_rate),
        Commands::Subs {
            path,
            at,
            delay,
            json,
        } => commands::subs::handle(&path, at, delay, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Init => commands::config::handle_init(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
