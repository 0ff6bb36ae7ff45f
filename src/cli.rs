use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "msgen",
    about = "Generate a Spring Boot microservice skeleton",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the questions and generate a new service
    New {
        /// Directory to create the service directory in
        #[arg(short, long)]
        output: Option<String>,

        /// Answer a question up front (can be repeated: -d key=value)
        #[arg(short, long = "data", value_name = "KEY=VALUE")]
        data: Vec<String>,

        /// Use default values without prompting
        #[arg(long)]
        defaults: bool,

        /// Load answers from a TOML file instead of prompting
        #[arg(long, value_name = "FILE")]
        answers: Option<PathBuf>,

        /// Write the collected answers to a TOML file
        #[arg(long, value_name = "FILE")]
        save_answers: Option<PathBuf>,

        /// Read templates from this directory instead of the built-in set
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Show the files that would be written without writing them
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print each file's content or its diff against disk
        #[arg(long, requires = "dry_run")]
        contents: bool,
    },

    /// List the questions, their defaults and choices
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the templates the generator uses
    Templates {
        /// Check that this directory provides every template
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },
}
