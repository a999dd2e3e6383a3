//! # Hoop - Hoop Bridge terminal client
//!
//! A terminal client for the Hoop Bridge youth basketball social programme:
//! the programme's informational screens plus a lightweight task board,
//! all in memory for the lifetime of the session.
//!
//! ## Key Features
//!
//! - **Programme screens**: home with category grid and featured stories,
//!   trainings agenda, mentorship, education, opportunities, live
//!   broadcasts, library and profile
//! - **Task board**: add tasks with a priority tag, toggle completion,
//!   edit labels in place, filter by priority, live pending/completed
//!   counters
//! - **No storage**: state lives for the session only; quitting resets it
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the client on the home screen
//! hoop
//!
//! # Jump straight to the task board with demo entries
//! hoop ui --screen tarefas --sample
//!
//! # Inspect the route table
//! hoop screens
//!
//! # Dump a screen's content as JSON
//! hoop content treinos --json
//! ```
//!
//! Unknown `--screen` names are tolerated and open the home screen; the
//! screens themselves are a closed set, so navigation inside the client
//! can never reach an unknown screen.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod content;
pub mod fields;
pub mod list;
pub mod screen;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ui {
        screen: None,
        sample: false,
    });

    match command {
        Commands::Ui { screen, sample } => cmd_ui(screen, sample),
        Commands::Screens { json } => cmd_screens(json),
        Commands::Content { screen, json } => cmd_content(&screen, json),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
