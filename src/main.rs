mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("parsed arguments: {:?}", cli);

    match cli.command {
        Commands::New {
            output,
            data,
            defaults,
            answers,
            save_answers,
            templates,
            dry_run,
            contents,
        } => commands::new::run(commands::new::NewArgs {
            output,
            data,
            defaults,
            answers,
            save_answers,
            templates,
            dry_run,
            contents,
        }),
        Commands::Questions { json } => commands::questions::run(json),
        Commands::Templates { templates } => commands::templates::run(templates),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
