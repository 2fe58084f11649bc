// crates/pulse-terminal/src/components/positions.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;

pub fn draw_positions(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Symbol", "Net Qty"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.positions().into_iter().map(|(symbol, qty)| {
        let qty_style = if qty > 0 {
            Style::default().fg(Color::Green)
        } else if qty < 0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        Row::new(vec![
            Cell::from(symbol),
            Cell::from(format!("{:+}", qty)).style(qty_style),
        ])
    }).collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Positions ")
            .borders(Borders::ALL));

    f.render_widget(table, area);
}
