//! Terminal lifecycle for the interactive client.

use std::io;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::list::TaskList;
use crate::screen::Screen;
use crate::tui::app::App;

/// Run the interactive client until the user exits.
///
/// Enters the alternate screen and raw mode, runs the event loop, and
/// restores the terminal even when the loop returns an error.
pub fn run_tui(start: Screen, tasks: TaskList) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("hoop"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(start, tasks);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}
