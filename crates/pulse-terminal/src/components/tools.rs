// crates/pulse-terminal/src/components/tools.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::ui::format_price;

/// Voice tables currently in force.
pub fn draw_tools(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let header = Row::new(vec!["Preset", "Action", "Qty", "Price"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app.interpreter.presets().iter().map(|(id, preset)| {
        Row::new(vec![
            Cell::from(id.to_string()),
            Cell::from(preset.action.as_upper()),
            Cell::from(preset.quantity.to_string()),
            Cell::from(format_price(preset.price)),
        ])
    }).collect();
    let presets = Table::new(rows, [
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Min(8),
    ])
    .header(header)
    .block(Block::default().title(" Tools - Voice Presets ").borders(Borders::ALL));
    f.render_widget(presets, chunks[0]);

    let header = Row::new(vec!["Company", "Ticker"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app.interpreter.symbols().iter().map(|(company, ticker)| {
        Row::new(vec![Cell::from(company.to_string()), Cell::from(ticker.to_string())])
    }).collect();
    let symbols = Table::new(rows, [Constraint::Length(14), Constraint::Min(6)])
        .header(header)
        .block(Block::default().title(" Companies ").borders(Borders::ALL));
    f.render_widget(symbols, chunks[1]);
}
