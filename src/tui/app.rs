//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the screen router and
//! the task board, handles keyboard input per screen, and renders the
//! active screen with the programme's palette.

use std::io;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap,
    },
    Frame, Terminal,
};

use crate::content::{self, CATEGORIES, HIGHLIGHTS};
use crate::fields::{Priority, PriorityFilter};
use crate::list::{format_age, format_filter, format_priority, TaskList};
use crate::screen::{Router, Screen};
use crate::tui::colors::{
    BLUE, GOLD, GREEN, LIGHT_BLUE, LIGHT_GREEN, ORANGE, PURPLE, RED_ORANGE, SUBTEXT,
};
use crate::tui::enums::{Overlay, TaskFocus};
use crate::tui::input::InputField;
use crate::tui::utils::centered_rect;

/// One in-flight label edit.
///
/// Only one session exists at a time; beginning another drops this one
/// without saving its scratch buffer.
struct EditSession {
    id: u64,
    buffer: InputField,
}

/// Main application state for the terminal user interface.
///
/// Owns the router and the task board; every mutation flows through the
/// key handlers below, so the whole surface can be driven in tests without
/// a terminal.
pub struct App {
    router: Router,
    tasks: TaskList,
    overlay: Option<Overlay>,
    home_state: ListState,
    task_state: TableState,
    focus: TaskFocus,
    input: InputField,
    pending_priority: Priority,
    filter: PriorityFilter,
    editing: Option<EditSession>,
    visible_ids: Vec<u64>,
    status_message: String,
}

impl App {
    /// Create the app on the given starting screen with a prepared board.
    pub fn new(start: Screen, tasks: TaskList) -> Self {
        let mut app = App {
            router: Router::new(start),
            tasks,
            overlay: None,
            home_state: ListState::default(),
            task_state: TableState::default(),
            focus: TaskFocus::Input,
            input: InputField::new(),
            pending_priority: Priority::Low,
            filter: PriorityFilter::All,
            editing: None,
            visible_ids: Vec::new(),
            status_message: String::new(),
        };
        app.home_state.select(Some(0));
        app.update_visible_tasks();
        app
    }

    /// Accent colour for a screen, from the programme palette.
    fn accent(screen: Screen) -> Color {
        match screen {
            Screen::Home => Color::White,
            Screen::Treinos => ORANGE,
            Screen::Mentoria => GREEN,
            Screen::Educacao => BLUE,
            Screen::Oportunidades => PURPLE,
            Screen::Live => RED_ORANGE,
            Screen::Biblioteca => LIGHT_BLUE,
            Screen::Perfil => LIGHT_GREEN,
            Screen::Tarefas => GOLD,
        }
    }

    fn navigate(&mut self, target: Screen) {
        self.router.navigate(target);
        if target == Screen::Tarefas {
            self.focus = TaskFocus::Input;
            self.update_visible_tasks();
        }
    }

    fn set_status(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Recompute the filtered row ids, keeping the selection on the same
    /// task when it survives the change.
    fn update_visible_tasks(&mut self) {
        let old_selected = self
            .task_state
            .selected()
            .and_then(|idx| self.visible_ids.get(idx))
            .copied();

        self.visible_ids = self
            .tasks
            .filtered(self.filter)
            .iter()
            .map(|t| t.id)
            .collect();

        if let Some(old_id) = old_selected {
            if let Some(new_idx) = self.visible_ids.iter().position(|&id| id == old_id) {
                self.task_state.select(Some(new_idx));
                return;
            }
        }
        self.task_state.select(if self.visible_ids.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    fn selected_id(&self) -> Option<u64> {
        self.task_state
            .selected()
            .and_then(|idx| self.visible_ids.get(idx))
            .copied()
    }

    /// Submit the input buffer as a new task.
    ///
    /// A blank buffer is silently ignored; on success the pending priority
    /// selector resets to low.
    fn submit_input(&mut self) {
        if let Some(id) = self.tasks.add(&self.input.value, self.pending_priority) {
            self.input.clear();
            self.pending_priority = Priority::Low;
            self.update_visible_tasks();
            if let Some(idx) = self.visible_ids.iter().position(|&v| v == id) {
                self.task_state.select(Some(idx));
            }
            self.set_status("Tarefa adicionada".to_string());
        }
    }

    /// Begin editing the selected task's label.
    ///
    /// Any edit already in progress is abandoned without saving.
    fn begin_edit(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Some(task) = self.tasks.get(id) {
                self.editing = Some(EditSession {
                    id,
                    buffer: InputField::with_value(&task.text),
                });
            }
        }
    }

    fn save_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            if self.tasks.set_text(session.id, &session.buffer.value) {
                self.set_status("Tarefa atualizada".to_string());
            }
            self.update_visible_tasks();
        }
    }

    fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.set_status("Edição cancelada".to_string());
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.tasks.toggle(id);
            self.update_visible_tasks();
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.tasks.remove(id) {
                self.set_status("Tarefa removida".to_string());
            }
            self.update_visible_tasks();
        }
    }

    fn clear_all(&mut self) {
        let removed = self.tasks.clear();
        self.editing = None;
        self.update_visible_tasks();
        self.set_status(format!("{removed} tarefa(s) removida(s)"));
    }

    fn cycle_filter(&mut self) {
        self.filter = self.filter.cycle();
        self.update_visible_tasks();
        self.set_status(format!("Filtro: {}", format_filter(self.filter)));
    }

    /// Handle one key press. Returns true when the app should quit.
    ///
    /// This is the single entry point the event loop and the tests use.
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        self.status_message.clear();

        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if self.overlay.is_some() {
            self.handle_overlay_key(key);
            return false;
        }

        match self.router.current() {
            Screen::Home => self.handle_home_key(key),
            Screen::Tarefas => {
                self.handle_tasks_key(key);
                false
            }
            _ => {
                self.handle_info_key(key);
                false
            }
        }
    }

    /// Handle keyboard input on the help overlay.
    fn handle_overlay_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => {
                self.overlay = None;
            }
            _ => {}
        }
    }

    /// Handle keyboard input on the home screen.
    ///
    /// Returns true if the application should quit.
    fn handle_home_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if let Some(selected) = self.home_state.selected() {
                    if selected > 0 {
                        self.home_state.select(Some(selected - 1));
                    }
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.home_state.selected() {
                    if selected + 1 < CATEGORIES.len() {
                        self.home_state.select(Some(selected + 1));
                    }
                }
            }
            KeyCode::Enter => {
                if let Some(selected) = self.home_state.selected() {
                    let target = CATEGORIES[selected].screen;
                    self.navigate(target);
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.navigate(CATEGORIES[idx].screen);
            }
            KeyCode::Char('t') => self.navigate(Screen::Tarefas),
            KeyCode::Char('l') => self.navigate(Screen::Live),
            KeyCode::Char('b') => self.navigate(Screen::Biblioteca),
            KeyCode::Char('p') => self.navigate(Screen::Perfil),
            KeyCode::Char('h') => self.overlay = Some(Overlay::Help),
            _ => {}
        }
        false
    }

    /// Handle keyboard input on the informational screens.
    fn handle_info_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.router.go_home(),
            KeyCode::Char('t') => self.navigate(Screen::Tarefas),
            KeyCode::Char('l') => self.navigate(Screen::Live),
            KeyCode::Char('b') => self.navigate(Screen::Biblioteca),
            KeyCode::Char('p') => self.navigate(Screen::Perfil),
            KeyCode::Char('h') => self.overlay = Some(Overlay::Help),
            _ => {}
        }
    }

    /// Handle keyboard input on the task board.
    fn handle_tasks_key(&mut self, key: KeyCode) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            TaskFocus::Input => match key {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Char(c) => self.input.handle_char(c),
                KeyCode::Backspace => self.input.handle_backspace(),
                KeyCode::Delete => self.input.handle_delete(),
                KeyCode::Left => self.input.move_cursor_left(),
                KeyCode::Right => self.input.move_cursor_right(),
                KeyCode::Home => self.input.move_cursor_home(),
                KeyCode::End => self.input.move_cursor_end(),
                KeyCode::Down => self.focus = TaskFocus::Priority,
                KeyCode::Up => self.focus = TaskFocus::List,
                KeyCode::Esc => {
                    if self.input.value.is_empty() {
                        self.router.go_home();
                    } else {
                        self.input.clear();
                    }
                }
                _ => {}
            },
            TaskFocus::Priority => match key {
                KeyCode::Left => self.pending_priority = self.pending_priority.prev(),
                KeyCode::Right => self.pending_priority = self.pending_priority.next(),
                KeyCode::Enter => self.submit_input(),
                KeyCode::Down => self.focus = TaskFocus::List,
                KeyCode::Up => self.focus = TaskFocus::Input,
                KeyCode::Esc => self.router.go_home(),
                _ => {}
            },
            TaskFocus::List => match key {
                KeyCode::Up => {
                    if let Some(selected) = self.task_state.selected() {
                        if selected > 0 {
                            self.task_state.select(Some(selected - 1));
                        }
                    } else if !self.visible_ids.is_empty() {
                        self.task_state.select(Some(0));
                    }
                }
                KeyCode::Down => {
                    if let Some(selected) = self.task_state.selected() {
                        if selected + 1 < self.visible_ids.len() {
                            self.task_state.select(Some(selected + 1));
                        }
                    } else if !self.visible_ids.is_empty() {
                        self.task_state.select(Some(0));
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => {
                    self.toggle_selected();
                }
                KeyCode::Char('e') => self.begin_edit(),
                KeyCode::Char('d') => self.delete_selected(),
                KeyCode::Char('f') => self.cycle_filter(),
                KeyCode::Char('C') => self.clear_all(),
                KeyCode::Char('l') => self.navigate(Screen::Live),
                KeyCode::Char('b') => self.navigate(Screen::Biblioteca),
                KeyCode::Char('p') => self.navigate(Screen::Perfil),
                KeyCode::Char('h') => self.overlay = Some(Overlay::Help),
                KeyCode::Esc | KeyCode::Char('q') => self.router.go_home(),
                _ => {}
            },
        }
    }

    /// Handle keyboard input while a label edit is in progress.
    fn handle_edit_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.save_edit(),
            KeyCode::Esc => self.cancel_edit(),
            key => {
                if let Some(session) = self.editing.as_mut() {
                    match key {
                        KeyCode::Char(c) => session.buffer.handle_char(c),
                        KeyCode::Backspace => session.buffer.handle_backspace(),
                        KeyCode::Delete => session.buffer.handle_delete(),
                        KeyCode::Left => session.buffer.move_cursor_left(),
                        KeyCode::Right => session.buffer.move_cursor_right(),
                        KeyCode::Home => session.buffer.move_cursor_home(),
                        KeyCode::End => session.buffer.move_cursor_end(),
                        _ => {}
                    }
                }
            }
        }
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key.code, key.modifiers));
                }
            }
        }
        Ok(false)
    }

    /// Render the screen header with title and subtitle.
    fn render_header(&self, f: &mut Frame, area: Rect, screen: Screen) {
        let accent = Self::accent(screen);
        let text = vec![
            Line::from(Span::styled(
                screen.title(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(screen.subtitle(), Style::default().fg(SUBTEXT))),
        ];
        let header = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render the home screen: category grid and featured stories.
    fn render_home(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(CATEGORIES.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_header(f, chunks[0], Screen::Home);

        let items: Vec<ListItem> = CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, c)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(SUBTEXT)),
                    Span::styled(
                        c.name,
                        Style::default()
                            .fg(Self::accent(c.screen))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();
        let categories = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Categorias"))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(categories, chunks[1], &mut self.home_state);

        let mut lines = Vec::new();
        for h in HIGHLIGHTS {
            lines.push(Line::from(Span::styled(
                h.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(h.desc, Style::default().fg(SUBTEXT))));
            lines.push(Line::from(""));
        }
        let highlights = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Destaques"))
            .wrap(Wrap { trim: true });
        f.render_widget(highlights, chunks[2]);
    }

    /// Render an informational screen from the static catalogue.
    fn render_info(&mut self, f: &mut Frame, area: Rect, screen: Screen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0], screen);

        let accent = Self::accent(screen);
        let mut lines = Vec::new();
        for section in content::sections(screen) {
            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            for entry in section.entries {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(entry.desc, Style::default().fg(SUBTEXT)),
                ]));
            }
            lines.push(Line::from(""));
        }
        let body = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(body, chunks[1]);
    }

    /// Render the task board: input, priority selector, table and counters.
    fn render_tasks(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_header(f, chunks[0], Screen::Tarefas);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(26)])
            .split(chunks[1]);

        let focus_style = |focused: bool| {
            if focused {
                Style::default().fg(GOLD)
            } else {
                Style::default()
            }
        };

        // Input box doubles as the edit field while a session is open.
        let (input_title, input_value, input_cursor) = match &self.editing {
            Some(session) => ("Editar tarefa", session.buffer.value.as_str(), session.buffer.cursor),
            None => ("Nova tarefa", self.input.value.as_str(), self.input.cursor),
        };
        let input = Paragraph::new(input_value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(input_title)
                .border_style(focus_style(self.editing.is_some() || self.focus == TaskFocus::Input)),
        );
        f.render_widget(input, top[0]);
        if self.editing.is_some() || self.focus == TaskFocus::Input {
            f.set_cursor_position((top[0].x + input_cursor as u16 + 1, top[0].y + 1));
        }

        let selector = Paragraph::new(Line::from(vec![
            Span::styled("‹ ", Style::default().fg(SUBTEXT)),
            Span::styled(
                format_priority(self.pending_priority),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ›", Style::default().fg(SUBTEXT)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Prioridade")
                .border_style(focus_style(self.focus == TaskFocus::Priority)),
        );
        f.render_widget(selector, top[1]);

        let header = Row::new(vec!["", "Prioridade", "Criada", "Tarefa"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(1);

        let now = Utc::now().timestamp();
        let rows: Vec<Row> = self
            .visible_ids
            .iter()
            .filter_map(|&id| self.tasks.get(id))
            .map(|task| {
                let mark = if task.completed { "[x]" } else { "[ ]" };
                let priority_style = match task.priority {
                    Priority::High => Style::default().fg(RED_ORANGE),
                    Priority::Medium => Style::default().fg(ORANGE),
                    Priority::Low => Style::default().fg(SUBTEXT),
                };
                let row_style = if task.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    ratatui::widgets::Cell::from(mark),
                    ratatui::widgets::Cell::from(format_priority(task.priority)).style(priority_style),
                    ratatui::widgets::Cell::from(format_age(task.created_at_utc, now)),
                    ratatui::widgets::Cell::from(task.text.clone()),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Min(20),
        ];
        let title = format!(
            "Tarefas ({}/{}) | {} pendentes, {} concluídas | filtro: {}",
            self.visible_ids.len(),
            self.tasks.len(),
            self.tasks.pending_count(),
            self.tasks.completed_count(),
            format_filter(self.filter),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(self.focus == TaskFocus::List));

        if self.tasks.is_empty() {
            let empty = Paragraph::new("Nenhuma tarefa ainda. Digite acima e pressione Enter.")
                .style(Style::default().fg(SUBTEXT))
                .block(block);
            f.render_widget(empty, chunks[2]);
            return;
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(table, chunks[2], &mut self.task_state);
    }

    /// Render the help dialog centered over the active screen.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);
        let help_text = vec![
            Line::from(Span::styled(
                "Atalhos",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Navegação:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  ↑/↓ Enter    Abre a categoria selecionada"),
            Line::from("  1-4          Abre a categoria pelo número"),
            Line::from("  t            Minhas tarefas"),
            Line::from("  l / b / p    Live, Biblioteca, Perfil"),
            Line::from("  Esc          Volta para a tela inicial"),
            Line::from(""),
            Line::from(Span::styled(
                "Tarefas:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Tab          Alterna entre campo, prioridade e lista"),
            Line::from("  Enter        Adiciona a tarefa digitada"),
            Line::from("  ←/→          Muda a prioridade pendente"),
            Line::from("  Espaço/c     Conclui / reabre a tarefa"),
            Line::from("  e            Edita o texto (Enter salva, Esc cancela)"),
            Line::from("  d            Exclui a tarefa"),
            Line::from("  f            Alterna o filtro de prioridade"),
            Line::from("  C            Limpa todas as tarefas"),
            Line::from(""),
            Line::from("  q/Ctrl+C     Sai do aplicativo"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Ajuda - qualquer tecla volta"),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.router.current() {
                Screen::Home => {
                    "Enter abre a categoria | t tarefas | h ajuda | q sai".to_string()
                }
                Screen::Tarefas => match self.focus {
                    _ if self.editing.is_some() => {
                        "Editando: Enter salva | Esc cancela".to_string()
                    }
                    TaskFocus::Input => {
                        "Enter adiciona | Tab alterna o foco | Esc volta".to_string()
                    }
                    TaskFocus::Priority => {
                        "←/→ muda a prioridade | Enter adiciona".to_string()
                    }
                    TaskFocus::List => {
                        "Espaço conclui | e edita | d exclui | f filtra | C limpa".to_string()
                    }
                },
                _ => "Esc volta | t tarefas | h ajuda".to_string(),
            }
        };

        let accent = Self::accent(self.router.current());
        let text_color = match accent {
            GOLD => Color::Rgb(20, 20, 20),
            Color::White => Color::Black,
            _ => Color::White,
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(accent).fg(text_color))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function dispatching on the current screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.router.current() {
            Screen::Home => self.render_home(f, chunks[0]),
            Screen::Tarefas => self.render_tasks(f, chunks[0]),
            screen => self.render_info(f, chunks[0], screen),
        }

        if self.overlay == Some(Overlay::Help) {
            self.render_help(f, chunks[0]);
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(app: &mut App, key: KeyCode) -> bool {
        app.handle_key(key, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_on(screen: Screen) -> App {
        App::new(screen, TaskList::new())
    }

    #[test]
    fn home_enter_opens_the_selected_category() {
        let mut app = app_on(Screen::Home);
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.router.current(), Screen::Treinos);
    }

    #[test]
    fn digits_jump_straight_to_a_category() {
        let mut app = app_on(Screen::Home);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.router.current(), Screen::Educacao);
    }

    #[test]
    fn footer_shortcuts_work_from_any_screen() {
        let mut app = app_on(Screen::Home);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.router.current(), Screen::Live);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.router.current(), Screen::Biblioteca);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.router.current(), Screen::Home);
    }

    #[test]
    fn quit_from_home_and_ctrl_c_anywhere() {
        let mut app = app_on(Screen::Home);
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = app_on(Screen::Tarefas);
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn typing_and_enter_adds_a_task_at_the_head() {
        let mut app = app_on(Screen::Tarefas);
        type_text(&mut app, "Treino");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Leitura");
        press(&mut app, KeyCode::Enter);

        let texts: Vec<&str> = app.tasks.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Leitura", "Treino"]);
        assert_eq!(app.tasks.pending_count(), 2);
    }

    #[test]
    fn blank_enter_is_a_silent_no_op() {
        let mut app = app_on(Screen::Tarefas);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.tasks.is_empty());
        assert_eq!(app.status_message, "");
    }

    #[test]
    fn priority_selector_feeds_the_next_add_then_resets() {
        let mut app = app_on(Screen::Tarefas);
        type_text(&mut app, "Treino");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.pending_priority, Priority::High);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks.tasks()[0].priority, Priority::High);
        assert_eq!(app.pending_priority, Priority::Low);
    }

    #[test]
    fn toggle_from_the_list_updates_counters() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, TaskFocus::List);
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.tasks.pending_count(), 2);
        assert_eq!(app.tasks.completed_count(), 1);
    }

    #[test]
    fn delete_removes_the_selected_row() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.visible_ids.len(), 2);
    }

    #[test]
    fn filter_cycles_and_narrows_the_visible_rows() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.filter, PriorityFilter::Low);
        assert_eq!(app.visible_ids.len(), 1);

        // Three more presses land back on the identity filter.
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('f'));
        }
        assert_eq!(app.filter, PriorityFilter::All);
        assert_eq!(app.visible_ids.len(), 3);
    }

    #[test]
    fn edit_session_saves_on_enter() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        press(&mut app, KeyCode::Char('e'));
        assert!(app.editing.is_some());

        press(&mut app, KeyCode::End);
        type_text(&mut app, " hoje");
        press(&mut app, KeyCode::Enter);

        assert!(app.editing.is_none());
        assert_eq!(app.tasks.tasks()[0].text, "Treino de fundamentos hoje");
    }

    #[test]
    fn escape_abandons_an_edit_without_saving() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "xxx");
        press(&mut app, KeyCode::Esc);

        assert!(app.editing.is_none());
        assert_eq!(app.tasks.tasks()[0].text, "Treino de fundamentos");
    }

    #[test]
    fn starting_a_new_edit_abandons_the_previous_session() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        app.begin_edit();
        type_text(&mut app, "!!!");

        // A second session replaces the first; its scratch buffer is
        // dropped without saving.
        app.task_state.select(Some(1));
        app.begin_edit();
        let second = app.editing.as_ref().map(|s| s.id).unwrap();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks.tasks()[0].text, "Treino de fundamentos");
        assert_eq!(app.tasks.tasks()[1].id, second);
        assert_eq!(app.tasks.tasks()[1].text, "Confirmar sessão de mentoria");
    }

    #[test]
    fn clear_all_resets_board_and_counters() {
        let mut app = App::new(Screen::Tarefas, TaskList::with_sample_tasks());
        app.focus = TaskFocus::List;
        press(&mut app, KeyCode::Char('C'));

        assert!(app.tasks.is_empty());
        assert_eq!(app.tasks.pending_count() + app.tasks.completed_count(), 0);
        assert!(app.visible_ids.is_empty());
        assert_eq!(app.task_state.selected(), None);
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let mut app = app_on(Screen::Home);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.overlay, Some(Overlay::Help));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, None);
        assert_eq!(app.router.current(), Screen::Home);
    }
}
