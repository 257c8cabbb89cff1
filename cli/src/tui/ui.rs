use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Task list
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("TASKDECK")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    draw_task_list(f, app, main_chunks[1]);
    draw_footer(f, app, main_chunks[2]);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let store = app.controller.state();

    let rows: Vec<Row> = store
        .tasks()
        .iter()
        .map(|task| {
            let status_icon = if task.completed { "✔" } else { "☐" };
            let created = task.created_at.format("%m-%d").to_string();
            let title_style = if task.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            Row::new(vec![
                Span::raw(status_icon),
                Span::raw(created),
                Span::styled(task.title.clone(), title_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tasks "),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let store = app.controller.state();

    // One line, repurposed by priority: input > deleting > confirming >
    // error > help. The delete-all hint only exists while it is actionable.
    let (text, style) = if matches!(app.input_mode, InputMode::Adding) {
        (
            format!("New task: {}", app.input),
            Style::default().fg(Color::White),
        )
    } else if store.is_deleting_all() {
        (
            "Deleting all tasks...".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if store.is_confirming_delete_all() {
        (
            "Delete ALL tasks? y: confirm | n/Esc: cancel".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(error) = store.error() {
        (error.to_string(), Style::default().fg(Color::Red))
    } else {
        let mut help = String::from("j/k: Navigate | a: Add | d: Delete");
        if app.controller.can_request_delete_all() {
            help.push_str(" | D: Delete All");
        }
        help.push_str(" | r: Reload | q: Quit");
        (help, Style::default().fg(Color::DarkGray))
    };

    let footer = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(footer, area);

    if matches!(app.input_mode, InputMode::Adding) {
        // Put the terminal cursor where the next character lands.
        let prefix = "New task: ";
        let offset = (area.width.saturating_sub(
            (prefix.chars().count() + app.input.chars().count()) as u16,
        )) / 2;
        f.set_cursor_position((
            area.x + offset + (prefix.chars().count() + app.cursor_position) as u16,
            area.y,
        ));
    }
}
