use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use oracle_core::DiceRoller;

use super::app::{App, InputMode, RollOutcome};

pub fn draw_table_list<R: DiceRoller>(frame: &mut Frame, app: &App<R>, area: Rect) {
    let items: Vec<ListItem> = app
        .filtered
        .iter()
        .filter_map(|&i| app.names.get(i))
        .map(|name| {
            let rows = app.oracle.tables().get(name).map_or(0, <[String]>::len);
            ListItem::new(Line::from(vec![
                Span::styled(name.as_str(), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(format!("{rows}"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = if app.search_query.is_empty() {
        format!(" Tables ({}) ", app.filtered.len())
    } else {
        format!(
            " Tables ({}) filter: \"{}\" ",
            app.filtered.len(),
            app.search_query
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .bold(),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.filtered.is_empty() {
        state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

pub fn draw_entries<R: DiceRoller>(frame: &mut Frame, app: &App<R>, area: Rect) {
    let title = match app.selected_table() {
        Some(name) => format!(" {name} "),
        None => " No table ".to_string(),
    };

    let entries = Paragraph::new(app.selected_listing())
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.entries_scroll, 0));

    frame.render_widget(entries, area);
}

pub fn draw_last_roll<R: DiceRoller>(frame: &mut Frame, app: &App<R>, area: Rect) {
    let (title, body, color) = match &app.last_roll {
        None => (
            " Roll ".to_string(),
            Line::from(Span::styled(
                "Press Enter to roll on the selected table.",
                Style::default().fg(Color::DarkGray),
            )),
            Color::Green,
        ),
        Some(RollOutcome::Rolled(roll)) => (
            format!(" {} #{} ", roll.table, roll.row),
            Line::from(Span::styled(
                roll.text.clone(),
                Style::default().fg(Color::White).bold(),
            )),
            Color::Green,
        ),
        Some(RollOutcome::Failed { table, message }) => (
            format!(" {table}: failed "),
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
            Color::Red,
        ),
    };

    let panel = Paragraph::new(body)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}

pub fn draw_status_bar<R: DiceRoller>(frame: &mut Frame, app: &App<R>, area: Rect) {
    let status = match app.input_mode {
        InputMode::Search => {
            format!("/{} (Enter to confirm, Esc to cancel)", app.search_query)
        }
        InputMode::Normal => format!(
            "Oracle | {} tables | j/k:navigate Enter:roll /:search H:help q:quit",
            app.names.len()
        ),
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::Yellow));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  j / ↓         Next table"),
        Line::from("  k / ↑         Previous table"),
        Line::from("  g / G         First / last table"),
        Line::from("  PgDn / PgUp   Scroll rows"),
        Line::from("  Enter / Space Roll on table"),
        Line::from("  /             Filter tables by name"),
        Line::from("  H / ?         Toggle this help"),
        Line::from("  q             Quit"),
        Line::from("  Ctrl+C        Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
