mod app;
mod views;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use oracle_core::{DiceRoller, Oracle};

use app::{App, InputMode};

pub fn run<R: DiceRoller>(oracle: Oracle<R>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(oracle);
    tracing::info!(tables = app.names.len(), "starting table browser");

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop<R: DiceRoller>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                    KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                    KeyCode::Char('g') => app.move_to_top(),
                    KeyCode::Char('G') => app.move_to_bottom(),
                    KeyCode::PageDown => app.scroll_entries_down(),
                    KeyCode::PageUp => app.scroll_entries_up(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.roll_selected(),
                    KeyCode::Char('/') => app.start_search(),
                    KeyCode::Char('H') | KeyCode::Char('?') => app.toggle_help(),
                    KeyCode::Esc if app.show_help => app.toggle_help(),
                    _ => {}
                },
                InputMode::Search => match key.code {
                    KeyCode::Esc => app.cancel_search(),
                    KeyCode::Enter => app.confirm_search(),
                    KeyCode::Backspace => app.search_backspace(),
                    KeyCode::Char(c) => app.search_push(c),
                    _ => {}
                },
            }
        }
    }
}

fn draw<R: DiceRoller>(frame: &mut Frame, app: &App<R>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Tables and entries
            Constraint::Length(5), // Last roll
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    views::draw_table_list(frame, app, columns[0]);
    views::draw_entries(frame, app, columns[1]);
    views::draw_last_roll(frame, app, rows[1]);
    views::draw_status_bar(frame, app, rows[2]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
