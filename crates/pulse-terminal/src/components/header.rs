// crates/pulse-terminal/src/components/header.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, InputMode, Page};

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),  // Logo
            Constraint::Min(40),     // Navigation
            Constraint::Length(34),  // Voice + logout
        ])
        .split(area);

    let logo = Paragraph::new(Span::styled(
        "Trade Pulse",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(logo, chunks[0]);

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.current_page.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, chunks[1]);

    // Either the "Order by Voice" button or the stop control, never both.
    let voice = if matches!(app.input_mode, InputMode::Listening) {
        Span::styled(
            "● Listening [Enter] Stop",
            Style::default().fg(Color::White).bg(Color::Red),
        )
    } else {
        Span::styled(
            "[V] Order by Voice",
            Style::default().fg(Color::Black).bg(Color::Green),
        )
    };
    let right = Paragraph::new(Line::from(vec![
        voice,
        Span::raw(" "),
        Span::styled("[F1]", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("[L]ogout", Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(right, chunks[2]);
}
