//! Command implementations for the CLI interface.
//!
//! This module contains the handlers behind the subcommands: launching the
//! interactive client, listing the route table, dumping screen content,
//! and generating shell completions.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;

use crate::cli::Cli;
use crate::content;
use crate::list::TaskList;
use crate::screen::Screen;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive client (the default).
    Ui {
        /// Starting screen by route name. Unknown names open the home screen.
        #[arg(long)]
        screen: Option<String>,
        /// Seed the task board with sample entries.
        #[arg(long)]
        sample: bool,
    },

    /// List the available screens.
    Screens {
        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the static content of one screen.
    Content {
        /// Screen route name. Unknown names resolve to home.
        screen: String,
        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// One row of the route table, for listings and JSON output.
#[derive(Serialize)]
struct ScreenInfo {
    name: &'static str,
    title: &'static str,
    subtitle: &'static str,
}

impl From<Screen> for ScreenInfo {
    fn from(screen: Screen) -> Self {
        ScreenInfo {
            name: screen.name(),
            title: screen.title(),
            subtitle: screen.subtitle(),
        }
    }
}

/// Launch the interactive client.
pub fn cmd_ui(screen: Option<String>, sample: bool) -> Result<()> {
    let start = screen.as_deref().map_or(Screen::Home, Screen::resolve);
    let tasks = if sample {
        TaskList::with_sample_tasks()
    } else {
        TaskList::new()
    };
    run_tui(start, tasks)?;
    Ok(())
}

/// Print the route table.
pub fn cmd_screens(json: bool) -> Result<()> {
    let screens: Vec<ScreenInfo> = Screen::ALL.into_iter().map(ScreenInfo::from).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&screens)?);
        return Ok(());
    }

    println!("{:<14} {:<24} {}", "Route", "Title", "Subtitle");
    for s in screens {
        println!("{:<14} {:<24} {}", s.name, s.title, s.subtitle);
    }
    Ok(())
}

/// Print the static content of one screen.
pub fn cmd_content(screen: &str, json: bool) -> Result<()> {
    let screen = Screen::resolve(screen);
    let sections = content::sections(screen);
    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    println!("{}", screen.title());
    println!("{}", screen.subtitle());
    for section in sections {
        println!();
        println!("{}", section.title);
        for entry in section.entries {
            println!("  {:<26} {}", entry.title, entry.desc);
        }
    }
    if sections.is_empty() {
        println!();
        println!("(conteúdo interativo; abra com `hoop ui --screen {}`)", screen.name());
    }
    Ok(())
}

/// Generate shell completion scripts to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "hoop", &mut io::stdout());
}
